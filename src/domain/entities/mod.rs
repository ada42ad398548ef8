//! Core domain entities.
//!
//! - [`UrlMapping`] - A persisted alias → URL pair
//! - [`NewMapping`] - Input for creating a mapping, validated before use

pub mod mapping;

pub use mapping::{NewMapping, UrlMapping};
