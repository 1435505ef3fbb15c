use crate::db::{book_from_row, Database, BOOK_COLUMNS};
use crate::error::ServiceError;
use actix_web::{web, HttpResponse};
use common::model::book::Book;
use rusqlite::params;
use serde::Deserialize;

const DEFAULT_LIMIT: u32 = 100;

#[derive(Debug, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub skip: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

/// Handler for `GET /books?skip=&limit=`. Always answers with an array.
pub async fn process(
    db: web::Data<Database>,
    page: web::Query<Pagination>,
) -> Result<HttpResponse, ServiceError> {
    let books = list_books(&db, &page)?;
    Ok(HttpResponse::Ok().json(books))
}

pub fn list_books(db: &Database, page: &Pagination) -> Result<Vec<Book>, ServiceError> {
    let conn = db.connection()?;
    let sql = format!(
        "SELECT {} FROM books ORDER BY id LIMIT ?1 OFFSET ?2",
        BOOK_COLUMNS
    );
    let mut stmt = conn.prepare(&sql)?;
    let books = stmt
        .query_map(params![page.limit, page.skip], book_from_row)?
        .collect::<Result<Vec<Book>, _>>()?;
    Ok(books)
}
