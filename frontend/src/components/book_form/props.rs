use common::model::book::Book;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct BookFormProps {
    /// Receives the book returned by the backend after each successful add.
    #[prop_or_default]
    pub on_book_added: Callback<Book>,
}
