//! DTOs for the save endpoint.

use serde::{Deserialize, Serialize};

use super::response::StatusResponse;
use crate::domain::entities::NewUrl;

/// Request body for `POST /url`.
///
/// `alias` may be omitted, `null` or empty to request a generated alias.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SaveUrlRequest {
    pub url: String,

    #[serde(default)]
    pub alias: Option<String>,
}

impl From<SaveUrlRequest> for NewUrl {
    fn from(req: SaveUrlRequest) -> Self {
        NewUrl::new(req.url, req.alias.unwrap_or_default())
    }
}

/// Successful save: `{"status": "OK", "alias": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveUrlResponse {
    #[serde(flatten)]
    pub response: StatusResponse,

    pub alias: String,
}

impl SaveUrlResponse {
    pub fn new(alias: String) -> Self {
        Self {
            response: StatusResponse::ok(),
            alias,
        }
    }
}
