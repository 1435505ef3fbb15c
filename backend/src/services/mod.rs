pub mod books;
pub mod root;

use crate::error::ServiceError;
use actix_web::web;

/// JSON extractor settings shared by every route.
///
/// Bodies that fail to parse are reported as 422 with the same `detail`
/// shape as field validation errors.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(64 * 1024)
        .error_handler(|err, _req| ServiceError::BadPayload(err.to_string()).into())
}

/// Query string errors (`?limit=-1`) as 422 with a `detail` body.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| ServiceError::BadPayload(err.to_string()).into())
}

/// Path segment errors (`/books/abc`) as 422 with a `detail` body.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _req| ServiceError::BadPayload(err.to_string()).into())
}
