//! Contact-chat HTTP handlers.
//!
//! Endpoints:
//! - POST /api/chat - Submit a message
//! - GET  /api/chat - List the most recent messages, newest first

use axum::Json;
use axum::extract::State;
use serde::Deserialize;

use vitrine_core::chat::notifier::DEFAULT_CHANNEL;
use vitrine_types::message::ChatMessage;

use crate::http::error::ApiError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// Submission body. `message` and `sender` are required; a submission
/// without them is rejected at deserialization.
#[derive(Debug, Deserialize)]
pub struct SubmitMessageRequest {
    pub message: String,
    pub sender: String,
    #[serde(rename = "channelId")]
    pub channel_id: Option<String>,
}

/// POST /api/chat - Persist a message, then best-effort publish it.
pub async fn submit_message(
    State(state): State<AppState>,
    Json(body): Json<SubmitMessageRequest>,
) -> Result<Json<ApiResponse<ChatMessage>>, ApiError> {
    let text = body.message.trim();
    if text.is_empty() {
        return Err(ApiError::Validation("message must not be empty".to_string()));
    }

    let sender = body.sender.trim();
    if sender.is_empty() {
        return Err(ApiError::Validation("sender must not be empty".to_string()));
    }

    let channel = body
        .channel_id
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_CHANNEL);

    let stored = state
        .chat_service
        .submit(text.to_string(), sender.to_string(), channel)
        .await
        .map_err(ApiError::Save)?;

    Ok(Json(ApiResponse::success_with_message("Message sent", stored)))
}

/// GET /api/chat - List up to 50 most-recent messages, newest first.
pub async fn list_messages(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ChatMessage>>>, ApiError> {
    let messages = state.chat_service.recent().await.map_err(ApiError::Load)?;

    Ok(Json(ApiResponse::success(messages)))
}
