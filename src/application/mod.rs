//! Application layer services implementing business logic.
//!
//! Services consume repository traits and expose a small API for HTTP
//! handlers.
//!
//! - [`services::shortener_service::ShortenerService`] - Save, resolve and delete aliases

pub mod services;
