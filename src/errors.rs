//! HTTP error surface.
//!
//! Every error leaves the server as `{"error": <message>}` with a 4xx/5xx
//! status. Service-layer enums convert into `ApiError` here so route
//! handlers can use `?` throughout. Database and hashing failures are
//! logged and collapsed to an opaque 500.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use crate::services::catalog::CatalogError;
use crate::services::customer::CustomerError;
use crate::services::order::OrderError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    /// The canonical missing-session / missing-token rejection.
    #[must_use]
    pub fn unauthorized() -> Self {
        Self::Unauthorized("Unauthorized".into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            Self::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::Internal(msg) => {
                error!(error = %msg, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_owned())
            }
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(_) => Self::NotFound("Not found".into()),
            CatalogError::Database(e) => Self::Internal(e.to_string()),
        }
    }
}

impl From<CustomerError> for ApiError {
    fn from(err: CustomerError) -> Self {
        match err {
            CustomerError::EmailExists => Self::BadRequest("Email exists".into()),
            CustomerError::Password(e) => Self::Internal(e.to_string()),
            CustomerError::Database(e) => Self::Internal(e.to_string()),
        }
    }
}

impl From<OrderError> for ApiError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::NotFound(_) => Self::NotFound("Not found".into()),
            OrderError::InvalidService => Self::BadRequest("Invalid service".into()),
            // Ownership mismatches reuse the "Unauthorized" body, just
            // with a 403 status.
            OrderError::NotOwner => Self::Forbidden("Unauthorized".into()),
            OrderError::Database(e) => Self::Internal(e.to_string()),
        }
    }
}

#[cfg(test)]
#[path = "errors_test.rs"]
mod tests;
