//! DTOs for the `/url` endpoints.

use serde::{Deserialize, Serialize};

use super::response::ResponseStatus;
use crate::domain::entities::NewMapping;

/// Request to save a URL under an optional alias.
///
/// A missing `url` deserializes as empty so it is reported by validation
/// rather than as a decoding failure.
#[derive(Debug, Deserialize, Serialize)]
pub struct SaveRequest {
    #[serde(default)]
    pub url: String,

    /// Optional alias. Absent or empty means "generate one".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

impl From<SaveRequest> for NewMapping {
    fn from(req: SaveRequest) -> Self {
        NewMapping {
            url: req.url,
            alias: req.alias,
        }
    }
}

/// Response carrying the alias the URL was stored under.
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveResponse {
    pub status: ResponseStatus,
    pub alias: String,
}

impl SaveResponse {
    pub fn new(alias: String) -> Self {
        Self {
            status: ResponseStatus::Ok,
            alias,
        }
    }
}
