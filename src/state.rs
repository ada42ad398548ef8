//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::api::middleware::auth::BasicCredentials;
use crate::application::services::ShortenerService;
use crate::domain::repositories::UrlRepository;
use crate::utils::alias_generator::AliasGenerator;

/// Shortener service over type-erased storage and alias generation, so any
/// backend can be plugged in without touching handlers.
pub type DynShortener = ShortenerService<dyn UrlRepository, dyn AliasGenerator>;

#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<DynShortener>,
    /// When set, mutating routes require HTTP basic authentication.
    pub credentials: Option<Arc<BasicCredentials>>,
}

impl AppState {
    pub fn new(
        repository: Arc<dyn UrlRepository>,
        generator: Arc<dyn AliasGenerator>,
        alias_length: usize,
    ) -> Self {
        Self {
            shortener: Arc::new(ShortenerService::new(repository, generator, alias_length)),
            credentials: None,
        }
    }

    pub fn with_credentials(mut self, credentials: BasicCredentials) -> Self {
        self.credentials = Some(Arc::new(credentials));
        self
    }
}
