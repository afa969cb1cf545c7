//! API error type and response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sea_orm::DbErr;
use serde_json::json;
use stoneline_core::storage::StorageError;
use stoneline_shared::JwtError;
use tracing::error;

/// Errors a handler can surface to the client.
///
/// Client errors carry their message through to the response body.
/// Server errors are logged and collapsed into a generic body so that
/// internals never leak.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed or invalid request input.
    #[error("{0}")]
    BadRequest(String),
    /// Missing or invalid credentials.
    #[error("{0}")]
    Unauthorized(String),
    /// Authenticated but not allowed.
    #[error("{0}")]
    Forbidden(String),
    /// Resource does not exist.
    #[error("{0}")]
    NotFound(String),
    /// Database failure.
    #[error(transparent)]
    Database(#[from] DbErr),
    /// Image storage failure.
    #[error(transparent)]
    Storage(#[from] StorageError),
    /// Anything else that should read as a server fault.
    #[error("{0}")]
    Internal(String),
}

impl From<JwtError> for ApiError {
    fn from(err: JwtError) -> Self {
        Self::Internal(format!("token generation failed: {err}"))
    }
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Storage(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = if status.is_server_error() {
            error!(error = %self, "request failed");
            "Server error".to_string()
        } else {
            self.to_string()
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_keep_their_message() {
        let response = ApiError::BadRequest("Invalid email address".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn server_errors_collapse_to_generic_body() {
        let err = ApiError::Database(DbErr::Custom("connection refused".to_string()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn status_mapping() {
        assert_eq!(
            ApiError::Unauthorized(String::new()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::Forbidden(String::new()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::NotFound(String::new()).status_code(),
            StatusCode::NOT_FOUND
        );
    }
}
