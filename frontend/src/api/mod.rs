//! HTTP client for the book backend.
//!
//! The base URL is fixed at build time from `LIBRARY_API_URL`. When it is not
//! set, requests use relative paths and go to the origin that served the app.

pub mod books;
mod error;

pub use error::ApiError;

const API_URL: &str = match option_env!("LIBRARY_API_URL") {
    Some(url) => url,
    None => "",
};

/// Absolute (or origin-relative) URL for an API path such as `/books/3`.
pub fn endpoint(path: &str) -> String {
    join_url(API_URL, path)
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}
