use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned identifier of a book.
pub type BookId = i64;

/// Reading progress of a book.
///
/// Serialized as its wire string (`want_to_read`, `reading`, `completed`).
/// Any other string is kept as `Other` so that a record carrying it still
/// decodes; such records are not placed on any shelf.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BookStatus {
    #[default]
    WantToRead,
    Reading,
    Completed,
    Other(String),
}

impl BookStatus {
    /// The three statuses a book can be shelved under, in display order.
    pub const KNOWN: [BookStatus; 3] = [
        BookStatus::WantToRead,
        BookStatus::Reading,
        BookStatus::Completed,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            BookStatus::WantToRead => "want_to_read",
            BookStatus::Reading => "reading",
            BookStatus::Completed => "completed",
            BookStatus::Other(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, BookStatus::Other(_))
    }

    /// Label used by the status `<select>` options.
    pub fn option_label(&self) -> &str {
        match self {
            BookStatus::WantToRead => "Want to Read",
            BookStatus::Reading => "Reading",
            BookStatus::Completed => "Completed",
            BookStatus::Other(raw) => raw,
        }
    }

    /// Badge text: underscores become spaces and every word is capitalized.
    pub fn badge_text(&self) -> String {
        format_status(self.as_str())
    }
}

impl From<String> for BookStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "want_to_read" => BookStatus::WantToRead,
            "reading" => BookStatus::Reading,
            "completed" => BookStatus::Completed,
            _ => BookStatus::Other(raw),
        }
    }
}

impl From<&str> for BookStatus {
    fn from(raw: &str) -> Self {
        BookStatus::from(raw.to_string())
    }
}

impl From<BookStatus> for String {
    fn from(status: BookStatus) -> Self {
        match status {
            BookStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for BookStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Splits a raw status on `_` and capitalizes the first letter of each word.
///
/// `want_to_read` becomes `Want To Read`. Unknown values go through the same
/// transformation, whatever it produces.
pub fn format_status(raw: &str) -> String {
    raw.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// A persisted book as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub status: BookStatus,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Book {
    /// Applies the fields present in `update`, leaving the others untouched.
    pub fn apply(&mut self, update: BookUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(author) = update.author {
            self.author = author;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(genre) = update.genre {
            self.genre = genre;
        }
        if let Some(notes) = update.notes {
            self.notes = notes;
        }
    }
}

/// Body of `POST /books`: every field of a book except its id.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub status: BookStatus,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Body of `PUT /books/{id}`. Absent fields are not sent and stay unchanged.
///
/// `genre` and `notes` are nullable columns: `Some(None)` is an explicit
/// `null` that clears the stored value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BookUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<BookStatus>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub genre: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
}

/// Marks a field as present even when its value is `null`; absence is left
/// to `#[serde(default)]`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl BookUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.status.is_none()
            && self.genre.is_none()
            && self.notes.is_none()
    }
}

/// Editable, unsaved copy of a book's fields as held by a form.
///
/// Optional fields are plain strings here; an absent genre or notes value is
/// edited as an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub status: BookStatus,
    pub genre: String,
    pub notes: String,
}

/// Names one editable field of a [`BookDraft`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Author,
    Status,
    Genre,
    Notes,
}

impl BookDraft {
    /// Seeds a draft from a persisted book.
    pub fn from_book(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            status: book.status.clone(),
            genre: book.genre.clone().unwrap_or_default(),
            notes: book.notes.clone().unwrap_or_default(),
        }
    }

    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Title => self.title = value,
            DraftField::Author => self.author = value,
            DraftField::Status => self.status = BookStatus::from(value),
            DraftField::Genre => self.genre = value,
            DraftField::Notes => self.notes = value,
        }
    }

    /// `true` when both required fields hold something other than whitespace.
    pub fn has_required_fields(&self) -> bool {
        !self.title.trim().is_empty() && !self.author.trim().is_empty()
    }

    pub fn to_new_book(&self) -> NewBook {
        NewBook {
            title: self.title.clone(),
            author: self.author.clone(),
            status: self.status.clone(),
            genre: Some(self.genre.clone()),
            notes: Some(self.notes.clone()),
        }
    }

    /// Full set of edited fields, as sent by the inline edit form.
    ///
    /// A status outside the known three is left out, so a record carrying
    /// one keeps it unless the user picks another.
    pub fn to_update(&self) -> BookUpdate {
        BookUpdate {
            title: Some(self.title.clone()),
            author: Some(self.author.clone()),
            status: self.status.is_known().then(|| self.status.clone()),
            genre: Some(Some(self.genre.clone())),
            notes: Some(Some(self.notes.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Book {
        Book {
            id: 7,
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            status: BookStatus::Reading,
            genre: None,
            notes: Some("re-read".to_string()),
        }
    }

    #[test]
    fn want_to_read_badge_is_title_cased() {
        assert_eq!(BookStatus::WantToRead.badge_text(), "Want To Read");
        assert_eq!(format_status("completed"), "Completed");
    }

    #[test]
    fn unknown_status_survives_the_wire() {
        let book: Book = serde_json::from_str(
            r#"{"id":1,"title":"t","author":"a","status":"on_hold","genre":null,"notes":null}"#,
        )
        .unwrap();
        assert_eq!(book.status, BookStatus::Other("on_hold".to_string()));
        assert!(!book.status.is_known());
        assert_eq!(book.status.badge_text(), "On Hold");
        assert_eq!(serde_json::to_value(&book.status).unwrap(), "on_hold");
    }

    #[test]
    fn status_defaults_to_want_to_read_when_missing() {
        let new_book: NewBook =
            serde_json::from_str(r#"{"title":"Emma","author":"Jane Austen"}"#).unwrap();
        assert_eq!(new_book.status, BookStatus::WantToRead);
        assert_eq!(new_book.genre, None);
    }

    #[test]
    fn update_skips_absent_fields_when_serialized() {
        let update = BookUpdate {
            status: Some(BookStatus::Completed),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "completed" }));
    }

    #[test]
    fn apply_changes_only_present_fields() {
        let mut book = sample();
        book.apply(BookUpdate {
            genre: Some(Some("Science Fiction".to_string())),
            ..Default::default()
        });
        assert_eq!(book.genre.as_deref(), Some("Science Fiction"));
        assert_eq!(book.title, "Dune");
        assert_eq!(book.status, BookStatus::Reading);
        assert_eq!(book.notes.as_deref(), Some("re-read"));
    }

    #[test]
    fn explicit_null_is_distinct_from_absent() {
        let update: BookUpdate = serde_json::from_str(r#"{"genre":null}"#).unwrap();
        assert_eq!(update.genre, Some(None));
        assert_eq!(update.notes, None);
        assert!(!update.is_empty());

        let mut book = sample();
        book.genre = Some("SF".to_string());
        book.apply(update);
        assert_eq!(book.genre, None);
        assert_eq!(book.notes.as_deref(), Some("re-read"));
    }

    #[test]
    fn cleared_field_is_sent_as_null() {
        let update = BookUpdate {
            notes: Some(None),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({ "notes": null }));
    }

    #[test]
    fn draft_from_book_uses_empty_strings_for_missing_fields() {
        let draft = BookDraft::from_book(&sample());
        assert_eq!(draft.genre, "");
        assert_eq!(draft.notes, "re-read");
        assert_eq!(draft.status, BookStatus::Reading);
    }

    #[test]
    fn draft_requires_title_and_author() {
        let mut draft = BookDraft::default();
        assert!(!draft.has_required_fields());
        draft.set(DraftField::Title, "Emma".to_string());
        assert!(!draft.has_required_fields());
        draft.set(DraftField::Author, "   ".to_string());
        assert!(!draft.has_required_fields());
        draft.set(DraftField::Author, "Jane Austen".to_string());
        assert!(draft.has_required_fields());
    }

    #[test]
    fn unknown_status_is_not_sent_back_on_save() {
        let mut book = sample();
        book.status = BookStatus::from("on_hold");
        let mut draft = BookDraft::from_book(&book);
        draft.set(DraftField::Notes, "paused".to_string());

        let update = draft.to_update();
        assert_eq!(update.status, None);
        assert_eq!(update.notes, Some(Some("paused".to_string())));

        draft.set(DraftField::Status, "reading".to_string());
        assert_eq!(draft.to_update().status, Some(BookStatus::Reading));
    }

    #[test]
    fn draft_status_field_parses_wire_value() {
        let mut draft = BookDraft::default();
        draft.set(DraftField::Status, "completed".to_string());
        assert_eq!(draft.status, BookStatus::Completed);
    }
}
