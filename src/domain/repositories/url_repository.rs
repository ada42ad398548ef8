//! Repository trait for alias → URL storage.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::UrlMapping;

/// Failures surfaced by a [`UrlRepository`].
///
/// Only two conditions are distinguished. Everything else is opaque to the
/// service layer and carried as [`StoreError::Backend`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// The alias is already taken (unique constraint violation).
    #[error("alias already exists")]
    Conflict,

    /// No mapping matches the alias.
    #[error("url not found")]
    NotFound,

    #[error("storage failure: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Box::new(err))
    }
}

/// Repository interface for URL mappings.
///
/// Every operation is atomic with respect to concurrent callers. Uniqueness of
/// aliases is enforced by the backing engine, not by application locking.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_url.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new mapping and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Conflict`] if the alias already exists.
    /// Returns [`StoreError::Backend`] on any other storage failure.
    async fn save(&self, url: &str, alias: &str) -> Result<i64, StoreError>;

    /// Returns the mapping stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no mapping matches.
    /// Returns [`StoreError::Backend`] on storage failures.
    async fn lookup(&self, alias: &str) -> Result<UrlMapping, StoreError>;

    /// Removes the mapping stored under `alias`, if any.
    ///
    /// Deleting an unknown alias is a no-op, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] on storage failures.
    async fn delete(&self, alias: &str) -> Result<(), StoreError>;
}
