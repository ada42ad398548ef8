//! Alias creation, resolution and deletion service.

use std::sync::Arc;

use tracing::{error, info};
use validator::Validate;

use crate::domain::entities::NewMapping;
use crate::domain::repositories::{StoreError, UrlRepository};
use crate::error::AppError;
use crate::utils::alias_generator::AliasGenerator;

/// Service orchestrating the alias lifecycle.
///
/// Holds no state between requests: the repository is the single source of
/// truth for every call. Each operation is single-shot; storage failures are
/// reported immediately and never retried here.
pub struct ShortenerService<R: UrlRepository + ?Sized, G: AliasGenerator + ?Sized> {
    repository: Arc<R>,
    generator: Arc<G>,
    alias_length: usize,
}

impl<R: UrlRepository + ?Sized, G: AliasGenerator + ?Sized> ShortenerService<R, G> {
    /// Creates a new shortener service.
    ///
    /// `alias_length` is the length of aliases generated for mappings saved
    /// without one.
    pub fn new(repository: Arc<R>, generator: Arc<G>, alias_length: usize) -> Self {
        Self {
            repository,
            generator,
            alias_length,
        }
    }

    /// Persists a new mapping and returns the alias it is stored under.
    ///
    /// If the request carries no alias (or an empty one), a random alias of
    /// the configured length is generated. A generated alias that happens to
    /// collide is reported as a conflict like any other.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if the URL is missing or not absolute
    /// - [`AppError::AliasExists`] if the alias is taken
    /// - [`AppError::Internal`] on storage failures
    pub async fn save(&self, new_mapping: NewMapping) -> Result<String, AppError> {
        new_mapping.validate()?;

        let alias = match new_mapping.requested_alias() {
            Some(alias) => alias.to_string(),
            None => self.generator.generate(self.alias_length),
        };

        match self.repository.save(&new_mapping.url, &alias).await {
            Ok(id) => {
                info!(id, alias = %alias, "url added");
                Ok(alias)
            }
            Err(StoreError::Conflict) => {
                info!(url = %new_mapping.url, alias = %alias, "url already exists");
                Err(AppError::AliasExists)
            }
            Err(e) => {
                error!(error = %e, alias = %alias, "failed to add url");
                Err(AppError::Internal("failed to add url"))
            }
        }
    }

    /// Returns the destination URL for `alias`.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if `alias` is empty (the store is not consulted)
    /// - [`AppError::NotFound`] if no mapping exists
    /// - [`AppError::Internal`] on storage failures
    pub async fn resolve(&self, alias: &str) -> Result<String, AppError> {
        if alias.is_empty() {
            info!("alias is empty");
            return Err(AppError::invalid_request());
        }

        match self.repository.lookup(alias).await {
            Ok(mapping) => {
                info!(id = mapping.id, alias, url = %mapping.url, "got url");
                Ok(mapping.url)
            }
            Err(StoreError::NotFound) => {
                info!(alias, "url not found");
                Err(AppError::NotFound)
            }
            Err(e) => {
                error!(error = %e, alias, "failed to get url");
                Err(AppError::Internal("failed to get url"))
            }
        }
    }

    /// Deletes the mapping stored under `alias`.
    ///
    /// Idempotent: deleting an alias that does not exist succeeds.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if `alias` is empty (the store is not consulted)
    /// - [`AppError::NotFound`] only if the repository itself reports it
    /// - [`AppError::Internal`] on storage failures
    pub async fn delete(&self, alias: &str) -> Result<(), AppError> {
        if alias.is_empty() {
            info!("alias is empty");
            return Err(AppError::invalid_request());
        }

        match self.repository.delete(alias).await {
            Ok(()) => {
                info!(alias, "url deleted");
                Ok(())
            }
            Err(StoreError::NotFound) => {
                info!(alias, "url not found");
                Err(AppError::NotFound)
            }
            Err(e) => {
                error!(error = %e, alias, "failed to delete url");
                Err(AppError::Internal("failed to delete url"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::UrlMapping;
    use crate::domain::repositories::MockUrlRepository;
    use crate::utils::alias_generator::{
        ALPHABET, MockAliasGenerator, RandomAliasGenerator, SeededAliasGenerator,
    };

    fn storage_failure() -> StoreError {
        StoreError::backend(std::io::Error::other("disk I/O error"))
    }

    fn service_with(
        repo: MockUrlRepository,
        generator: MockAliasGenerator,
    ) -> ShortenerService<MockUrlRepository, MockAliasGenerator> {
        ShortenerService::new(Arc::new(repo), Arc::new(generator), 6)
    }

    #[tokio::test]
    async fn test_save_with_explicit_alias() {
        let mut mock_repo = MockUrlRepository::new();
        let mut mock_generator = MockAliasGenerator::new();

        mock_generator.expect_generate().times(0);
        mock_repo
            .expect_save()
            .withf(|url, alias| url == "https://example.com" && alias == "abc123")
            .times(1)
            .returning(|_, _| Ok(1));

        let service = service_with(mock_repo, mock_generator);

        let alias = service
            .save(NewMapping::new("https://example.com", Some("abc123")))
            .await
            .unwrap();

        assert_eq!(alias, "abc123");
    }

    #[tokio::test]
    async fn test_save_generates_alias_when_absent() {
        let mut mock_repo = MockUrlRepository::new();
        let mut mock_generator = MockAliasGenerator::new();

        mock_generator
            .expect_generate()
            .withf(|length| *length == 6)
            .times(1)
            .returning(|_| "Gen123".to_string());
        mock_repo
            .expect_save()
            .withf(|_, alias| alias == "Gen123")
            .times(1)
            .returning(|_, _| Ok(7));

        let service = service_with(mock_repo, mock_generator);

        let alias = service
            .save(NewMapping::new("https://example.com", None))
            .await
            .unwrap();

        assert_eq!(alias, "Gen123");
    }

    #[tokio::test]
    async fn test_save_generates_alias_when_empty() {
        let mut mock_repo = MockUrlRepository::new();
        let mut mock_generator = MockAliasGenerator::new();

        mock_generator
            .expect_generate()
            .times(1)
            .returning(|_| "xYz789".to_string());
        mock_repo.expect_save().times(1).returning(|_, _| Ok(1));

        let service = service_with(mock_repo, mock_generator);

        let alias = service
            .save(NewMapping::new("https://example.com", Some("")))
            .await
            .unwrap();

        assert_eq!(alias, "xYz789");
    }

    #[tokio::test]
    async fn test_save_with_seeded_generator_is_deterministic() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo.expect_save().times(1).returning(|_, _| Ok(1));

        let expected = SeededAliasGenerator::new(99).generate(8);
        let service =
            ShortenerService::new(Arc::new(mock_repo), Arc::new(SeededAliasGenerator::new(99)), 8);

        let alias = service
            .save(NewMapping::new("https://example.com", None))
            .await
            .unwrap();

        assert_eq!(alias, expected);
    }

    #[tokio::test]
    async fn test_save_random_alias_shape() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo.expect_save().times(1).returning(|_, _| Ok(1));

        let service = ShortenerService::new(Arc::new(mock_repo), Arc::new(RandomAliasGenerator), 6);

        let alias = service
            .save(NewMapping::new("https://example.com", None))
            .await
            .unwrap();

        assert_eq!(alias.len(), 6);
        assert!(alias.bytes().all(|b| ALPHABET.contains(&b)));
    }

    #[tokio::test]
    async fn test_save_conflict() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_save()
            .times(1)
            .returning(|_, _| Err(StoreError::Conflict));

        let service = service_with(mock_repo, MockAliasGenerator::new());

        let result = service
            .save(NewMapping::new("https://example.com", Some("taken")))
            .await;

        assert!(matches!(result, Err(AppError::AliasExists)));
    }

    #[tokio::test]
    async fn test_save_storage_failure_is_internal() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_save()
            .times(1)
            .returning(|_, _| Err(storage_failure()));

        let service = service_with(mock_repo, MockAliasGenerator::new());

        let err = service
            .save(NewMapping::new("https://example.com", Some("abc")))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Internal(_)));
        assert_eq!(err.to_string(), "failed to add url");
    }

    #[tokio::test]
    async fn test_save_invalid_url_skips_store() {
        let mut mock_repo = MockUrlRepository::new();
        let mut mock_generator = MockAliasGenerator::new();
        mock_repo.expect_save().times(0);
        mock_generator.expect_generate().times(0);

        let service = service_with(mock_repo, mock_generator);

        let err = service
            .save(NewMapping::new("not-a-url", None))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(err.to_string(), "field URL is not a valid URL");
    }

    #[tokio::test]
    async fn test_save_empty_url_is_required() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo.expect_save().times(0);

        let service = service_with(mock_repo, MockAliasGenerator::new());

        let err = service
            .save(NewMapping::new("", Some("some_alias")))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "field URL is a required field");
    }

    #[tokio::test]
    async fn test_resolve_success() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_lookup()
            .withf(|alias| alias == "abc123")
            .times(1)
            .returning(|alias| {
                Ok(UrlMapping::new(
                    7,
                    alias.to_string(),
                    "https://example.com".to_string(),
                ))
            });

        let service = service_with(mock_repo, MockAliasGenerator::new());

        let url = service.resolve("abc123").await.unwrap();
        assert_eq!(url, "https://example.com");
    }

    #[tokio::test]
    async fn test_resolve_not_found() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_lookup()
            .times(1)
            .returning(|_| Err(StoreError::NotFound));

        let service = service_with(mock_repo, MockAliasGenerator::new());

        let result = service.resolve("missing").await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_resolve_storage_failure_is_internal() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_lookup()
            .times(1)
            .returning(|_| Err(storage_failure()));

        let service = service_with(mock_repo, MockAliasGenerator::new());

        let err = service.resolve("abc").await.unwrap_err();
        assert_eq!(err.to_string(), "failed to get url");
    }

    #[tokio::test]
    async fn test_resolve_empty_alias_skips_store() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo.expect_lookup().times(0);

        let service = service_with(mock_repo, MockAliasGenerator::new());

        let err = service.resolve("").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(err.to_string(), "invalid request");
    }

    #[tokio::test]
    async fn test_delete_success() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_delete()
            .withf(|alias| alias == "abc123")
            .times(1)
            .returning(|_| Ok(()));

        let service = service_with(mock_repo, MockAliasGenerator::new());

        assert!(service.delete("abc123").await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_not_found_from_store() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_delete()
            .times(1)
            .returning(|_| Err(StoreError::NotFound));

        let service = service_with(mock_repo, MockAliasGenerator::new());

        let result = service.delete("abc").await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_storage_failure_is_internal() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_delete()
            .times(1)
            .returning(|_| Err(storage_failure()));

        let service = service_with(mock_repo, MockAliasGenerator::new());

        let err = service.delete("abc").await.unwrap_err();
        assert_eq!(err.to_string(), "failed to delete url");
    }

    #[tokio::test]
    async fn test_delete_empty_alias_skips_store() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo.expect_delete().times(0);

        let service = service_with(mock_repo, MockAliasGenerator::new());

        let err = service.delete("").await.unwrap_err();
        assert_eq!(err.to_string(), "invalid request");
    }
}
