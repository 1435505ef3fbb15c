//! The five `/books` calls.
//!
//! Each call logs its failure to the console before handing it back, and none
//! of them retries.

use common::model::book::{Book, BookId, BookUpdate, NewBook};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use super::{endpoint, ApiError};

/// `POST /books`: returns the stored book with its assigned id.
pub async fn create(new_book: &NewBook) -> Result<Book, ApiError> {
    let result: Result<Book, ApiError> = async {
        let response = Request::post(&endpoint("/books"))
            .json(new_book)?
            .send()
            .await?;
        decode(checked(response).await?).await
    }
    .await;
    logged("creating book", result)
}

/// `GET /books`: every book, in the order the backend returns them.
pub async fn list_all() -> Result<Vec<Book>, ApiError> {
    let result: Result<Vec<Book>, ApiError> = async {
        let response = Request::get(&endpoint("/books")).send().await?;
        decode(checked(response).await?).await
    }
    .await;
    logged("fetching books", result)
}

/// `GET /books/{id}`.
pub async fn get_one(book_id: BookId) -> Result<Book, ApiError> {
    let result: Result<Book, ApiError> = async {
        let response = Request::get(&book_url(book_id)).send().await?;
        decode(checked(response).await?).await
    }
    .await;
    logged("fetching book", result)
}

/// `PUT /books/{id}`: returns the full record as stored after the update.
pub async fn update(book_id: BookId, fields: &BookUpdate) -> Result<Book, ApiError> {
    let result: Result<Book, ApiError> = async {
        let response = Request::put(&book_url(book_id))
            .json(fields)?
            .send()
            .await?;
        decode(checked(response).await?).await
    }
    .await;
    logged("updating book", result)
}

/// `DELETE /books/{id}`: `true` once the backend confirms. No body is read.
pub async fn delete(book_id: BookId) -> Result<bool, ApiError> {
    let result: Result<bool, ApiError> = async {
        let response = Request::delete(&book_url(book_id)).send().await?;
        checked(response).await.map(|_| true)
    }
    .await;
    logged("deleting book", result)
}

fn book_url(book_id: BookId) -> String {
    endpoint(&format!("/books/{}", book_id))
}

/// Turns a non-2xx response into `ApiError::Status`.
async fn checked(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status { status, body })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

fn logged<T>(action: &str, result: Result<T, ApiError>) -> Result<T, ApiError> {
    if let Err(err) = &result {
        gloo_console::error!(format!("Error {}: {}", action, err));
    }
    result
}
