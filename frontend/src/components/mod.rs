pub mod book_form;
pub mod book_item;
pub mod book_list;
pub mod helpers;
