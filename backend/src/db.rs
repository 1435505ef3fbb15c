//! SQLite storage for the book service.
//!
//! A single connection is shared by all workers behind a mutex; handlers hold
//! the lock only while their statements run.

use crate::error::ServiceError;
use common::model::book::{Book, BookStatus};
use rusqlite::{Connection, Row};
use std::sync::{Mutex, MutexGuard};

/// Column list matching the field order expected by [`book_from_row`].
pub const BOOK_COLUMNS: &str = "id, title, author, status, genre, notes";

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS books (
        id      INTEGER PRIMARY KEY AUTOINCREMENT,
        title   TEXT NOT NULL,
        author  TEXT NOT NULL,
        status  TEXT NOT NULL DEFAULT 'want_to_read',
        genre   TEXT,
        notes   TEXT
    );
";

pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    /// Opens (or creates) the database file at `path` and ensures the schema.
    pub fn open(path: &str) -> Result<Self, rusqlite::Error> {
        Self::with_connection(Connection::open(path)?)
    }

    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self, rusqlite::Error> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, rusqlite::Error> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn connection(&self) -> Result<MutexGuard<'_, Connection>, ServiceError> {
        self.conn.lock().map_err(|_| ServiceError::Unavailable)
    }
}

/// Maps a row selected with [`BOOK_COLUMNS`] to a `Book`.
pub fn book_from_row(row: &Row<'_>) -> rusqlite::Result<Book> {
    let status: String = row.get(3)?;
    Ok(Book {
        id: row.get(0)?,
        title: row.get(1)?,
        author: row.get(2)?,
        status: BookStatus::from(status),
        genre: row.get(4)?,
        notes: row.get(5)?,
    })
}

/// Loads one book by id, `NotFound` when absent.
pub fn find_book(conn: &Connection, book_id: i64) -> Result<Book, ServiceError> {
    let sql = format!("SELECT {} FROM books WHERE id = ?1", BOOK_COLUMNS);
    match conn.query_row(&sql, [book_id], book_from_row) {
        Ok(book) => Ok(book),
        Err(rusqlite::Error::QueryReturnedNoRows) => Err(ServiceError::NotFound(book_id)),
        Err(e) => Err(e.into()),
    }
}
