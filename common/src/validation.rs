//! Field rules for book payloads accepted by the backend.

use thiserror::Error;

use crate::model::book::{BookStatus, BookUpdate, NewBook};

pub const TITLE_MAX_CHARS: usize = 200;
pub const AUTHOR_MAX_CHARS: usize = 100;
pub const GENRE_MAX_CHARS: usize = 50;
pub const NOTES_MAX_CHARS: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field}: must not be empty")]
    Empty { field: &'static str },

    #[error("{field}: must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("status: unknown value '{0}'")]
    UnknownStatus(String),
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Empty { field } | ValidationError::TooLong { field, .. } => *field,
            ValidationError::UnknownStatus(_) => "status",
        }
    }
}

fn required(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    bounded(field, value, max)
}

fn bounded(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}

fn known_status(status: &BookStatus) -> Result<(), ValidationError> {
    match status {
        BookStatus::Other(raw) => Err(ValidationError::UnknownStatus(raw.clone())),
        _ => Ok(()),
    }
}

/// Checks a create payload, reporting the first offending field.
pub fn validate_new_book(book: &NewBook) -> Result<(), ValidationError> {
    required("title", &book.title, TITLE_MAX_CHARS)?;
    required("author", &book.author, AUTHOR_MAX_CHARS)?;
    known_status(&book.status)?;
    if let Some(genre) = &book.genre {
        bounded("genre", genre, GENRE_MAX_CHARS)?;
    }
    if let Some(notes) = &book.notes {
        bounded("notes", notes, NOTES_MAX_CHARS)?;
    }
    Ok(())
}

/// Checks only the fields present in a partial update.
pub fn validate_update(update: &BookUpdate) -> Result<(), ValidationError> {
    if let Some(title) = &update.title {
        required("title", title, TITLE_MAX_CHARS)?;
    }
    if let Some(author) = &update.author {
        required("author", author, AUTHOR_MAX_CHARS)?;
    }
    if let Some(status) = &update.status {
        known_status(status)?;
    }
    if let Some(Some(genre)) = &update.genre {
        bounded("genre", genre, GENRE_MAX_CHARS)?;
    }
    if let Some(Some(notes)) = &update.notes {
        bounded("notes", notes, NOTES_MAX_CHARS)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_book() -> NewBook {
        NewBook {
            title: "Emma".to_string(),
            author: "Jane Austen".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn accepts_minimal_book() {
        assert_eq!(validate_new_book(&new_book()), Ok(()));
    }

    #[test]
    fn rejects_blank_title() {
        let book = NewBook {
            title: "  ".to_string(),
            ..new_book()
        };
        let err = validate_new_book(&book).unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "title" });
        assert_eq!(err.to_string(), "title: must not be empty");
    }

    #[test]
    fn rejects_overlong_genre_counting_chars() {
        let book = NewBook {
            genre: Some("é".repeat(GENRE_MAX_CHARS + 1)),
            ..new_book()
        };
        assert_eq!(
            validate_new_book(&book),
            Err(ValidationError::TooLong {
                field: "genre",
                max: GENRE_MAX_CHARS
            })
        );

        let at_limit = NewBook {
            genre: Some("é".repeat(GENRE_MAX_CHARS)),
            ..new_book()
        };
        assert_eq!(validate_new_book(&at_limit), Ok(()));
    }

    #[test]
    fn rejects_unknown_status() {
        let book = NewBook {
            status: BookStatus::from("paused"),
            ..new_book()
        };
        let err = validate_new_book(&book).unwrap_err();
        assert_eq!(err.field(), "status");
    }

    #[test]
    fn update_checks_only_present_fields() {
        assert_eq!(validate_update(&BookUpdate::default()), Ok(()));

        let update = BookUpdate {
            author: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(
            validate_update(&update),
            Err(ValidationError::Empty { field: "author" })
        );
    }
}
