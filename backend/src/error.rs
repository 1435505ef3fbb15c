//! Errors returned by the book handlers and their HTTP mapping.
//!
//! Every error body has the shape `{"detail": "<message>"}`.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::model::book::BookId;
use common::validation::ValidationError;
use log::error;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Book not found")]
    NotFound(BookId),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid request: {0}")]
    BadPayload(String),

    #[error("Database failure: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Database connection is unavailable")]
    Unavailable,
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Validation(_) | ServiceError::BadPayload(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ServiceError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ServiceError::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!("{}", self);
        }
        HttpResponse::build(status).json(json!({ "detail": self.to_string() }))
    }
}
