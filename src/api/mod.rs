//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into service calls and service
//! outcomes into status codes and JSON bodies.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Authentication, request ID and tracing middleware
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
