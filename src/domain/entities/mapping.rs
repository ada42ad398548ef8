//! URL mapping entity and its creation input.

use std::borrow::Cow;
use url::Url;
use validator::{Validate, ValidationError};

/// A persisted alias → destination URL pair.
///
/// The `id` is assigned by the store and is only meaningful inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapping {
    pub id: i64,
    pub alias: String,
    pub url: String,
}

impl UrlMapping {
    /// Creates a new UrlMapping instance.
    pub fn new(id: i64, alias: String, url: String) -> Self {
        Self { id, alias, url }
    }
}

/// Input data for creating a new mapping.
///
/// An absent or empty `alias` asks the service to generate one.
#[derive(Debug, Clone, Validate)]
pub struct NewMapping {
    #[validate(custom(function = "validate_destination"))]
    pub url: String,

    pub alias: Option<String>,
}

impl NewMapping {
    pub fn new(url: impl Into<String>, alias: Option<&str>) -> Self {
        Self {
            url: url.into(),
            alias: alias.map(str::to_string),
        }
    }

    /// Returns the caller-supplied alias, treating an empty string as absent.
    pub fn requested_alias(&self) -> Option<&str> {
        self.alias.as_deref().filter(|alias| !alias.is_empty())
    }
}

/// Checks that the destination is present and parses as an absolute URL.
///
/// The URL itself is never rewritten; parsing only decides acceptance.
fn validate_destination(url: &str) -> Result<(), ValidationError> {
    if url.is_empty() {
        return Err(field_error("required", "field URL is a required field"));
    }

    if Url::parse(url).is_err() {
        return Err(field_error("url", "field URL is not a valid URL"));
    }

    Ok(())
}

fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}
