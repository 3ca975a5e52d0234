//! API Error Responses

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use risk_engine::ValidationError;
use serde::Serialize;
use storage::StorageError;
use thiserror::Error;
use tracing::{error, warn};

/// Errors surfaced by request handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Submission failed one or more input constraints
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(Vec<ValidationError>),

    /// Persistence failed; fatal for the request, never retried
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<Vec<ValidationError>> for ApiError {
    fn from(errors: Vec<ValidationError>) -> Self {
        ApiError::Validation(errors)
    }
}

/// Field-level validation detail in error responses
#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Structured error body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<FieldError>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => {
                warn!("Rejected submission: {} validation error(s)", errors.len());
                let details = errors
                    .iter()
                    .map(|e| FieldError {
                        field: e.field(),
                        message: e.to_string(),
                    })
                    .collect();
                let body = ErrorBody {
                    error: "validation_error",
                    details,
                };
                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            }
            ApiError::Storage(err) => {
                error!("Storage failure: {}", err);
                let body = ErrorBody {
                    error: "storage_error",
                    details: Vec::new(),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}
