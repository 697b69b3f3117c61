//! Common response envelope.

use serde::{Deserialize, Serialize};

/// Outcome marker carried by every JSON response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "Error")]
    Error,
}

/// `{"status": "...", "error": "..."}` envelope.
///
/// `error` is omitted on success.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: Status,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self {
            status: Status::Ok,
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            error: Some(message.into()),
        }
    }
}
