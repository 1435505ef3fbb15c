//! Cross-origin access for a frontend served from another origin, such as a
//! dev server on `localhost:5173` pointed at this API via `LIBRARY_API_URL`.

use actix_cors::Cors;

/// Allows any method and header, with credentials, from `origins` only.
pub fn cors(origins: &[String]) -> Cors {
    origins.iter().fold(
        Cors::default()
            .allow_any_method()
            .allow_any_header()
            .supports_credentials()
            .max_age(3600),
        |cors, origin| cors.allowed_origin(origin),
    )
}
