//! Chat endpoint: one textual reply per prompt, same wording as the terminal chat.

use axum::extract::{Json, State};

use crate::AppState;

#[derive(serde::Deserialize)]
pub(crate) struct ChatRequest {
    prompt: String,
}

/// POST /api/v1/chat
pub(crate) async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Json<serde_json::Value> {
    let correlation_id = uuid::Uuid::new_v4().to_string();
    let (intent, response) = state.helpdesk.chat_turn(&req.prompt);
    let intent = intent.map(|i| i.as_str()).unwrap_or("unavailable");
    tracing::info!(
        target: "helpdesk::chat",
        correlation_id = %correlation_id,
        intent,
        "Chat request: {} chars",
        req.prompt.len()
    );
    Json(serde_json::json!({
        "status": "ok",
        "intent": intent,
        "response": response,
        "correlation_id": correlation_id,
    }))
}
