use crate::db::{find_book, Database};
use crate::error::ServiceError;
use actix_web::{web, HttpResponse};
use common::model::book::{Book, BookId};

/// Handler for `GET /books/{book_id}`.
pub async fn process(
    db: web::Data<Database>,
    book_id: web::Path<BookId>,
) -> Result<HttpResponse, ServiceError> {
    let book = get_book(&db, book_id.into_inner())?;
    Ok(HttpResponse::Ok().json(book))
}

pub fn get_book(db: &Database, book_id: BookId) -> Result<Book, ServiceError> {
    let conn = db.connection()?;
    find_book(&conn, book_id)
}
