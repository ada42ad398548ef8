//! # Alias Shortener
//!
//! A small URL shortener built with Axum and SQLite. Clients store a URL
//! under a chosen (or generated) alias, get redirected from `/{alias}`, and
//! delete aliases they no longer need.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Mapping entity and the storage contract
//! - **Application Layer** ([`application`]) - Alias lifecycle orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence
//! - **API Layer** ([`api`]) - Handlers, DTOs and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export STORAGE_PATH="./storage/storage.db"
//! export LISTEN="localhost:8082"
//! cargo run
//!
//! curl -X POST localhost:8082/url -d '{"url":"https://example.com","alias":"ex"}' \
//!      -H 'content-type: application/json'
//! curl -i localhost:8082/ex
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ShortenerService;
    pub use crate::domain::entities::{NewMapping, UrlMapping};
    pub use crate::domain::repositories::{StoreError, UrlRepository};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::SqliteUrlRepository;
    pub use crate::state::AppState;
    pub use crate::utils::alias_generator::{
        AliasGenerator, RandomAliasGenerator, SeededAliasGenerator,
    };
}
