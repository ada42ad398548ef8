//! Infrastructure layer: concrete adapters for the domain's traits.
//!
//! - [`persistence`] - SQLite-backed repositories

pub mod persistence;
