//! Shared response envelope.
//!
//! Every JSON body carries a `status` of `"OK"` or `"Error"`; error bodies add
//! an `error` message.

use serde::{Deserialize, Serialize};

/// Outcome marker present in every response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseStatus {
    #[serde(rename = "OK")]
    Ok,
    Error,
}

/// Body returned for acknowledged operations, e.g. delete.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: ResponseStatus,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self {
            status: ResponseStatus::Ok,
        }
    }
}

/// Body returned for every failed request.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: ResponseStatus,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            error: error.into(),
        }
    }
}
