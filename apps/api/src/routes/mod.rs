pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::chat::handlers as chat;
use crate::planner::handlers as planner;
use crate::state::AppState;
use crate::transcript::handlers as transcript;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/transcript/upload",
            post(transcript::handle_upload)
                .layer(DefaultBodyLimit::max(transcript::MAX_UPLOAD_BYTES)),
        )
        .route("/api/v1/planner/generate", post(planner::handle_generate_plan))
        .route("/api/v1/chat/message", post(chat::handle_chat_message))
        .with_state(state)
}
