use common::model::book::{Book, DraftField};

use crate::api::ApiError;

pub enum Msg {
    /// A form control changed.
    Input(DraftField, String),
    Submit,
    /// Outcome of the create call started by `Submit`.
    Created(Result<Book, ApiError>),
}
