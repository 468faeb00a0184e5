//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server errors to Sentry
//! before responding to the client. All route handlers that can fail return
//! `Result<T, AppError>`. Error bodies are JSON: `{"error": "<message>"}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use punchcard_core::CustomerIdError;

use crate::store::StoreError;

/// Message returned when a check-in arrives without a usable customer ID.
pub const CUSTOMER_ID_REQUIRED: &str = "clienteId é obrigatório";

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Store operation failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// A required field is missing or unusable.
    #[error("{0}")]
    Validation(String),

    /// Request body could not be read.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Route does not exist.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<CustomerIdError> for AppError {
    fn from(err: CustomerIdError) -> Self {
        tracing::debug!(error = %err, "Rejected customer id");
        Self::Validation(CUSTOMER_ID_REQUIRED.to_string())
    }
}

impl AppError {
    const fn status(&self) -> StatusCode {
        match self {
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::Store(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Store(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        };

        (self.status(), Json(json!({ "error": message }))).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
