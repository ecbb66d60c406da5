//! Application error type mapping to HTTP status codes and the envelope.
//!
//! Persistence failures surface as a 500 with a generic message; the
//! underlying error is logged server-side only, never echoed to the client.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use vitrine_types::error::StoreError;

use crate::http::response::ApiResponse;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Store write failed during message submission.
    Save(StoreError),
    /// Store read failed during message listing.
    Load(StoreError),
    /// Request body failed validation.
    Validation(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Save(err) => {
                error!(error = %err, "failed to save chat message");
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to save message")
            }
            ApiError::Load(err) => {
                error!(error = %err, "failed to load chat messages");
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to load messages")
            }
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.as_str()),
        };

        (status, Json(ApiResponse::failure(message))).into_response()
    }
}
