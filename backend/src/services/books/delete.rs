use crate::db::Database;
use crate::error::ServiceError;
use actix_web::{web, HttpResponse};
use common::model::book::BookId;
use log::info;
use rusqlite::params;

/// Handler for `DELETE /books/{book_id}`: `204 No Content` with an empty body.
pub async fn process(
    db: web::Data<Database>,
    book_id: web::Path<BookId>,
) -> Result<HttpResponse, ServiceError> {
    let book_id = book_id.into_inner();
    delete_book(&db, book_id)?;
    info!("Book deleted: {}", book_id);
    Ok(HttpResponse::NoContent().finish())
}

pub fn delete_book(db: &Database, book_id: BookId) -> Result<(), ServiceError> {
    let conn = db.connection()?;
    let removed = conn.execute("DELETE FROM books WHERE id = ?1", params![book_id])?;
    if removed == 0 {
        return Err(ServiceError::NotFound(book_id));
    }
    Ok(())
}
