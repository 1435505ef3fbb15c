//! State of the list view and its transitions.
//!
//! The collection is only ever replaced wholesale by a successful fetch, or
//! patched one entry at a time by child notifications. A failed fetch leaves
//! it as it was.

use common::model::book::{Book, BookId};
use common::model::shelf::{shelve, Shelf};

use super::messages::Msg;

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load books. Please try again.";

pub struct BookListComponent {
    /// The collection in backend order.
    pub books: Vec<Book>,

    /// A fetch is in flight. Starts `true` since the first fetch runs on mount.
    pub loading: bool,

    /// User-facing message of the last failed fetch.
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Fetch,
}

/// What the view shows, in precedence order.
#[derive(Debug, PartialEq)]
pub enum ListDisplay<'a> {
    Loading,
    Error(&'a str),
    Empty,
    Shelves(Vec<Shelf<'a>>),
}

impl BookListComponent {
    pub fn new() -> Self {
        Self {
            books: Vec::new(),
            loading: true,
            error: None,
        }
    }

    pub fn reduce(&mut self, msg: Msg) -> Option<Command> {
        match msg {
            Msg::Fetch => {
                self.loading = true;
                self.error = None;
                Some(Command::Fetch)
            }
            Msg::Loaded(Ok(books)) => {
                self.books = books;
                self.loading = false;
                None
            }
            Msg::Loaded(Err(_)) => {
                self.error = Some(LOAD_FAILED_MESSAGE.to_string());
                self.loading = false;
                None
            }
            Msg::BookUpdated(updated) => {
                if let Some(slot) = self.books.iter_mut().find(|book| book.id == updated.id) {
                    *slot = updated;
                }
                None
            }
            Msg::BookDeleted(book_id) => {
                self.remove(book_id);
                None
            }
        }
    }

    /// Refresh signal from the parent: a fetch starts only when its value
    /// actually changed.
    pub fn refresh(&mut self, old_key: u64, new_key: u64) -> Option<Command> {
        if old_key == new_key {
            return None;
        }
        self.reduce(Msg::Fetch)
    }

    fn remove(&mut self, book_id: BookId) {
        self.books.retain(|book| book.id != book_id);
    }

    pub fn display(&self) -> ListDisplay<'_> {
        if self.loading {
            ListDisplay::Loading
        } else if let Some(error) = &self.error {
            ListDisplay::Error(error)
        } else if self.books.is_empty() {
            ListDisplay::Empty
        } else {
            ListDisplay::Shelves(shelve(&self.books))
        }
    }
}

impl Default for BookListComponent {
    fn default() -> Self {
        Self::new()
    }
}
