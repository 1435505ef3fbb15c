use crate::db::{find_book, Database};
use crate::error::ServiceError;
use actix_web::{web, HttpResponse};
use common::model::book::{Book, BookId, BookUpdate};
use common::validation::validate_update;
use log::info;
use rusqlite::params;

/// Handler for `PUT /books/{book_id}`.
///
/// Only the fields present in the body are changed; the response carries the
/// complete record after the update.
pub async fn process(
    db: web::Data<Database>,
    book_id: web::Path<BookId>,
    payload: web::Json<BookUpdate>,
) -> Result<HttpResponse, ServiceError> {
    let book = update_book(&db, book_id.into_inner(), payload.into_inner())?;
    info!("Book updated: {}", book.id);
    Ok(HttpResponse::Ok().json(book))
}

pub fn update_book(db: &Database, book_id: BookId, update: BookUpdate) -> Result<Book, ServiceError> {
    let conn = db.connection()?;
    let mut book = find_book(&conn, book_id)?;
    validate_update(&update)?;

    if update.is_empty() {
        return Ok(book);
    }

    book.apply(update);
    conn.execute(
        "UPDATE books SET title = ?1, author = ?2, status = ?3, genre = ?4, notes = ?5 WHERE id = ?6",
        params![
            &book.title,
            &book.author,
            book.status.as_str(),
            &book.genre,
            &book.notes,
            book.id
        ],
    )?;

    Ok(book)
}
