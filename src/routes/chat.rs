use axum::{
    extract::State,
    Json,
};
use crate::{
    message::{ChatRequest, ChatResponse},
    state::SharedState,
    services::{
        context::{clamp_context, MAX_CONTEXT_CHARS},
        prompt::{compose_prompt, SYSTEM_PRIMER},
    },
    error::AppError,
};

/// One request, one linear pass: validate, clamp the graph context, compose
/// the prompt, dispatch to the model, relay the reply.
pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let tutor = state
        .tutor
        .as_ref()
        .ok_or_else(|| AppError::BadRequest("GEMINI_API_KEY not configured".to_string()))?;

    let message = payload.message.trim();
    if message.is_empty() {
        return Err(AppError::BadRequest("Empty message".to_string()));
    }

    let graph_json = clamp_context(&payload.context, MAX_CONTEXT_CHARS);
    let prompt = compose_prompt(&graph_json, message);
    tracing::debug!(context_chars = graph_json.chars().count(), "dispatching chat prompt");

    let reply = tutor.generate(SYSTEM_PRIMER, &prompt).await.map_err(|e| {
        tracing::error!(error = %e, "generation request failed");
        AppError::Internal(e.to_string())
    })?;

    Ok(Json(ChatResponse { reply }))
}
