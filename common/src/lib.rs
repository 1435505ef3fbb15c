//! Wire model shared by the library frontend and backend.

pub mod model;
pub mod validation;
