use common::model::book::{Book, BookId};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct BookItemProps {
    pub book: Book,
    #[prop_or_default]
    pub on_book_updated: Callback<Book>,
    #[prop_or_default]
    pub on_book_deleted: Callback<BookId>,
}
