//! Axum route handlers for the Chat API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

/// POST /api/v1/chat/message
pub async fn handle_chat_message(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let question = request.message.trim();
    if question.is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }

    let response = state.advisor.answer(question).await?;
    Ok(Json(ChatResponse { response }))
}
