use crate::db::{find_book, Database};
use crate::error::ServiceError;
use actix_web::{web, HttpResponse};
use common::model::book::{Book, NewBook};
use common::validation::validate_new_book;
use log::info;
use rusqlite::params;

/// Handler for `POST /books`.
///
/// - `201 Created` with the stored `Book` on success.
/// - `422 Unprocessable Entity` when a field breaks its rule.
pub async fn process(
    db: web::Data<Database>,
    payload: web::Json<NewBook>,
) -> Result<HttpResponse, ServiceError> {
    let book = create_book(&db, &payload)?;
    info!("Book created: {} ({})", book.id, book.title);
    Ok(HttpResponse::Created().json(book))
}

pub fn create_book(db: &Database, new_book: &NewBook) -> Result<Book, ServiceError> {
    validate_new_book(new_book)?;

    let conn = db.connection()?;
    conn.execute(
        "INSERT INTO books (title, author, status, genre, notes) VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            &new_book.title,
            &new_book.author,
            new_book.status.as_str(),
            &new_book.genre,
            &new_book.notes
        ],
    )?;

    // Read back so the response reflects exactly what was stored.
    find_book(&conn, conn.last_insert_rowid())
}
