use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct BookListProps {
    /// Refresh signal: any change of value triggers a new fetch.
    #[prop_or_default]
    pub refresh_key: u64,
}
