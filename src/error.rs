//! Application error type and its HTTP representation.
//!
//! Every error renders as the service's JSON envelope:
//!
//! ```json
//! { "status": "Error", "error": "field URL is not a valid URL" }
//! ```
//!
//! The response also carries an [`ErrorCode`] extension. The legacy-status
//! middleware ([`crate::api::middleware::error_status`]) uses it to rewrite
//! workflow errors to `200 OK` for clients built against the old convention.

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use validator::ValidationErrors;

use crate::api::dto::response::StatusResponse;

/// Realm advertised in `WWW-Authenticate` challenges.
pub const AUTH_REALM: &str = "tinyalias";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Bad or missing input. The message carries field-level detail.
    #[error("{0}")]
    Validation(String),

    /// The alias is already taken.
    #[error("{0}")]
    Conflict(String),

    /// The alias is not present in the store.
    #[error("{0}")]
    NotFound(String),

    /// Missing or wrong Basic credentials.
    #[error("{0}")]
    Unauthorized(String),

    /// Any storage or internal failure. The message never includes internal detail.
    #[error("{0}")]
    Internal(String),
}

/// Machine-readable error kind attached to error responses as an extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorCode(pub &'static str);

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Returns the stable error code for this variant.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::Conflict(_) => "conflict",
            Self::NotFound(_) => "not_found",
            Self::Unauthorized(_) => "unauthorized",
            Self::Internal(_) => "internal_error",
        }
    }

    /// Returns the HTTP status for this variant.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(describe_validation_errors(&errors))
    }
}

/// Flattens validation errors into `field X ...` messages joined by `", "`.
///
/// Only the first failure per field is reported; fields are sorted so the
/// message is stable.
fn describe_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<(String, String)> = errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, failures)| {
            failures.first().map(|failure| {
                let message = failure
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("field {} is invalid", field));
                (field.to_string(), message)
            })
        })
        .collect();

    messages.sort();

    messages
        .into_iter()
        .map(|(_, message)| message)
        .collect::<Vec<_>>()
        .join(", ")
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();
        let is_unauthorized = matches!(self, Self::Unauthorized(_));

        let mut response = (status, Json(StatusResponse::error(self.to_string()))).into_response();

        if is_unauthorized {
            let challenge = format!("Basic realm=\"{}\"", AUTH_REALM);
            if let Ok(value) = HeaderValue::from_str(&challenge) {
                response
                    .headers_mut()
                    .insert(header::WWW_AUTHENTICATE, value);
            }
        } else {
            response.extensions_mut().insert(ErrorCode(code));
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::NewUrl;
    use validator::Validate;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::bad_request("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::conflict("x").status_code(), StatusCode::CONFLICT);
        assert_eq!(AppError::not_found("x").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::unauthorized("x").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::internal("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_display_is_the_message() {
        assert_eq!(AppError::not_found("not found").to_string(), "not found");
    }

    #[test]
    fn test_validation_errors_are_field_scoped() {
        let errors = NewUrl::new("not a url", "").validate().unwrap_err();
        let err = AppError::from(errors);

        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(err.to_string(), "field URL is not a valid URL");
    }

    #[test]
    fn test_multiple_validation_errors_are_joined() {
        let errors = NewUrl::new("", "health").validate().unwrap_err();
        let err = AppError::from(errors);

        assert_eq!(
            err.to_string(),
            "field Alias is reserved, field URL is a required field"
        );
    }

    #[test]
    fn test_error_response_is_tagged() {
        let response = AppError::conflict("alias already exists").into_response();

        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(
            response.extensions().get::<ErrorCode>(),
            Some(&ErrorCode("conflict"))
        );
    }

    #[test]
    fn test_unauthorized_has_challenge_and_no_tag() {
        let response = AppError::unauthorized("unauthorized").into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Basic realm=\"tinyalias\""
        );
        assert!(response.extensions().get::<ErrorCode>().is_none());
    }
}
