//! Server settings read from the process environment.
//!
//! A `.env` file in the working directory is loaded first when present, so
//! local runs can keep their settings there. Every variable is optional:
//!
//! | Variable               | Default                                       |
//! |------------------------|-----------------------------------------------|
//! | `LIBRARY_HOST`         | `127.0.0.1`                                   |
//! | `LIBRARY_PORT`         | `8000`                                        |
//! | `DATABASE_URL`         | `library.sqlite`                              |
//! | `LIBRARY_STATIC_DIR`   | unset                                         |
//! | `LIBRARY_CORS_ORIGINS` | `http://localhost:3000,http://localhost:5173` |

use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_DATABASE_URL: &str = "library.sqlite";
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://localhost:5173";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("LIBRARY_PORT must be a port number, got '{0}'")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    /// Path of the SQLite database file.
    pub database_url: String,
    /// Directory holding the built frontend, served at `/` when it exists.
    pub static_dir: Option<PathBuf>,
    /// Origins allowed to call the API from another site.
    pub cors_origins: Vec<String>,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing `.env` file is not an error.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from any key lookup, falling back to defaults for
    /// absent or empty values.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = match get("LIBRARY_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: get("LIBRARY_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            database_url: get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            static_dir: get("LIBRARY_STATIC_DIR").map(PathBuf::from),
            cors_origins: parse_origins(
                &get("LIBRARY_CORS_ORIGINS").unwrap_or_else(|| DEFAULT_CORS_ORIGINS.to_string()),
            ),
        })
    }
}

/// Comma separated list; blanks and trailing slashes are dropped.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|origin| origin.trim().trim_end_matches('/'))
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
