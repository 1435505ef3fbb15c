//! Personal library tracker: Yew single-page client for the `/books` API.

pub mod api;
pub mod app;
pub mod components;
