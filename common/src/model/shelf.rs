//! Grouping of a book collection into status shelves.

use crate::model::book::{Book, BookStatus};

/// Books sharing one status, in the order they appear in the collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Shelf<'a> {
    pub status: BookStatus,
    pub books: Vec<&'a Book>,
}

impl Shelf<'_> {
    pub fn title(&self) -> &'static str {
        shelf_title(&self.status).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

/// Section heading for a known status, `None` for anything else.
pub fn shelf_title(status: &BookStatus) -> Option<&'static str> {
    match status {
        BookStatus::WantToRead => Some("Want to Read"),
        BookStatus::Reading => Some("Currently Reading"),
        BookStatus::Completed => Some("Completed"),
        BookStatus::Other(_) => None,
    }
}

/// Partitions `books` by status in a single pass.
///
/// Only non-empty shelves are returned, always in the order
/// want-to-read, reading, completed. Books with an unknown status are left
/// out.
pub fn shelve(books: &[Book]) -> Vec<Shelf<'_>> {
    let mut shelves: Vec<Shelf<'_>> = BookStatus::KNOWN
        .iter()
        .map(|status| Shelf {
            status: status.clone(),
            books: Vec::new(),
        })
        .collect();

    for book in books {
        if let Some(shelf) = shelves.iter_mut().find(|s| s.status == book.status) {
            shelf.books.push(book);
        }
    }

    shelves.retain(|shelf| !shelf.is_empty());
    shelves
}

/// "1 book" or "N books".
pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 book".to_string()
    } else {
        format!("{} books", count)
    }
}
