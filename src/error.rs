use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use crate::db::StoreError;

/// Machine-readable codes returned in every error body.
pub mod error_code {
    pub const CREDENTIALS_TAKEN: &str = "CREDENTIALS_TAKEN";
    pub const INVALID_CREDENTIALS: &str = "INVALID_CREDENTIALS";
    pub const ACCESS_DENIED: &str = "ACCESS_DENIED";
    pub const VALIDATION_FAILED: &str = "VALIDATION_FAILED";
    pub const UNAUTHENTICATED: &str = "UNAUTHENTICATED";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const INTERNAL: &str = "INTERNAL";
}

/// Error type shared by services, extractors and handlers.
///
/// Rendered as `{"code": "ACCESS_DENIED", "message": "..."}`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Signup with an email that is already registered.
    #[error("Credentials taken")]
    CredentialsTaken,

    /// Signin with an unknown email or a wrong password. Both causes
    /// produce this same variant.
    #[error("Credentials incorrect")]
    InvalidCredentials,

    /// Mutation of a resource that is missing or owned by someone else.
    #[error("Access to resource denied")]
    AccessDenied,

    #[error("{0}")]
    Validation(String),

    /// Missing, malformed or expired bearer token.
    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::CredentialsTaken => error_code::CREDENTIALS_TAKEN,
            AppError::InvalidCredentials => error_code::INVALID_CREDENTIALS,
            AppError::AccessDenied => error_code::ACCESS_DENIED,
            AppError::Validation(_) => error_code::VALIDATION_FAILED,
            AppError::Unauthorized(_) => error_code::UNAUTHENTICATED,
            AppError::NotFound(_) => error_code::NOT_FOUND,
            AppError::Internal(_) => error_code::INTERNAL,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::CredentialsTaken
            | AppError::InvalidCredentials
            | AppError::AccessDenied => StatusCode::FORBIDDEN,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound => AppError::NotFound("Record not found".into()),
            StoreError::Conflict => AppError::Internal(anyhow::anyhow!("unexpected unique violation")),
            StoreError::Internal(e) => AppError::Internal(e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            AppError::Internal(e) => {
                error!(error = %e, "internal error");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };
        let body = serde_json::json!({
            "code": self.error_code(),
            "message": message,
        });
        (status, axum::Json(body)).into_response()
    }
}
