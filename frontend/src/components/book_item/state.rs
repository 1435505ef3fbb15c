//! State of a single item and its transitions.
//!
//! `book` is always the last server-confirmed record; `draft` holds the
//! edit form's fields and is only sent when the user saves.

use common::model::book::{Book, BookDraft, BookId, BookUpdate};

use super::messages::Msg;

pub const UPDATE_FAILED_MESSAGE: &str = "Failed to update book";
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete book";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Viewing,
    Editing,
}

pub struct BookItemComponent {
    pub book: Book,
    pub draft: BookDraft,
    pub mode: Mode,

    /// An update or delete call is in flight.
    pub pending: bool,
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Update(BookId, BookUpdate),
    ConfirmDelete { prompt: String },
    Delete(BookId),
    NotifyUpdated(Book),
    NotifyDeleted(BookId),
    ShowFailure(&'static str),
}

impl BookItemComponent {
    pub fn new(book: &Book) -> Self {
        Self {
            book: book.clone(),
            draft: BookDraft::from_book(book),
            mode: Mode::Viewing,
            pending: false,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.mode == Mode::Editing
    }

    /// Takes the record passed down by the parent. Returns `false` when it
    /// matches the one already held.
    pub fn receive(&mut self, book: &Book) -> bool {
        if *book == self.book {
            return false;
        }
        self.reduce(Msg::Sync(book.clone()));
        true
    }

    pub fn reduce(&mut self, msg: Msg) -> Option<Command> {
        match msg {
            Msg::Edit => {
                self.draft = BookDraft::from_book(&self.book);
                self.mode = Mode::Editing;
                None
            }
            Msg::Input(field, value) => {
                self.draft.set(field, value);
                None
            }
            Msg::Save => {
                if self.pending || !self.is_editing() || !self.draft.has_required_fields() {
                    return None;
                }
                self.pending = true;
                Some(Command::Update(self.book.id, self.draft.to_update()))
            }
            Msg::Saved(Ok(book)) => {
                self.pending = false;
                self.mode = Mode::Viewing;
                self.draft = BookDraft::from_book(&book);
                self.book = book.clone();
                Some(Command::NotifyUpdated(book))
            }
            Msg::Saved(Err(_)) => {
                // Still editing, edits kept.
                self.pending = false;
                Some(Command::ShowFailure(UPDATE_FAILED_MESSAGE))
            }
            Msg::Cancel => {
                self.draft = BookDraft::from_book(&self.book);
                self.mode = Mode::Viewing;
                None
            }
            Msg::Delete => {
                if self.pending {
                    return None;
                }
                Some(Command::ConfirmDelete {
                    prompt: format!("Are you sure you want to delete \"{}\"?", self.book.title),
                })
            }
            Msg::DeleteConfirmed => {
                if self.pending {
                    return None;
                }
                self.pending = true;
                Some(Command::Delete(self.book.id))
            }
            Msg::Deleted(Ok(_)) => {
                self.pending = false;
                Some(Command::NotifyDeleted(self.book.id))
            }
            Msg::Deleted(Err(_)) => {
                self.pending = false;
                Some(Command::ShowFailure(DELETE_FAILED_MESSAGE))
            }
            Msg::Sync(book) => {
                if !self.is_editing() {
                    self.draft = BookDraft::from_book(&book);
                }
                self.book = book;
                None
            }
        }
    }
}
