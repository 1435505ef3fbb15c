use common::model::book::{Book, DraftField};

use crate::api::ApiError;

pub enum Msg {
    Edit,
    Input(DraftField, String),
    Save,
    Saved(Result<Book, ApiError>),
    Cancel,
    /// Delete button pressed; confirmation not yet given.
    Delete,
    DeleteConfirmed,
    Deleted(Result<bool, ApiError>),
    /// The parent passed a newer copy of the record.
    Sync(Book),
}
