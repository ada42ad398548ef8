//! HTTP middleware for request processing and protection.
//!
//! Provides basic authentication, panic recovery, request IDs and
//! observability middleware.

pub mod auth;
pub mod panic;
pub mod request_id;
pub mod tracing;
