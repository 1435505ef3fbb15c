//! State of the creation form and its transitions.

use common::model::book::{Book, BookDraft, NewBook};

use super::messages::Msg;

pub const ADD_FAILED_MESSAGE: &str = "Failed to add book. Please try again.";

pub struct BookFormComponent {
    /// Fields as currently typed; status starts at want-to-read.
    pub draft: BookDraft,

    /// A create call is in flight.
    pub submitting: bool,

    /// User-facing message of the last failed submit.
    pub error: Option<String>,
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Create(NewBook),
    NotifyAdded(Book),
}

impl BookFormComponent {
    pub fn new() -> Self {
        Self {
            draft: BookDraft::default(),
            submitting: false,
            error: None,
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.submitting && self.draft.has_required_fields()
    }

    pub fn reduce(&mut self, msg: Msg) -> Option<Command> {
        match msg {
            Msg::Input(field, value) => {
                self.draft.set(field, value);
                None
            }
            Msg::Submit => {
                if !self.can_submit() {
                    return None;
                }
                self.submitting = true;
                self.error = None;
                Some(Command::Create(self.draft.to_new_book()))
            }
            Msg::Created(Ok(book)) => {
                self.draft = BookDraft::default();
                self.submitting = false;
                Some(Command::NotifyAdded(book))
            }
            Msg::Created(Err(_)) => {
                // The draft is kept so the user can resubmit as is.
                self.error = Some(ADD_FAILED_MESSAGE.to_string());
                self.submitting = false;
                None
            }
        }
    }
}

impl Default for BookFormComponent {
    fn default() -> Self {
        Self::new()
    }
}
