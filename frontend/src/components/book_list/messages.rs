use common::model::book::{Book, BookId};

use crate::api::ApiError;

pub enum Msg {
    /// Start a full fetch; also sent by the Retry button.
    Fetch,
    Loaded(Result<Vec<Book>, ApiError>),
    /// A child item saved this record.
    BookUpdated(Book),
    /// A child item deleted the record with this id.
    BookDeleted(BookId),
}
