use crate::{
    AppState,
    session::AudioSlot,
    types::{AnswerSource, AppError, ChatRequest, ChatResponse, HistoryResponse, Result},
};
use axum::{Json, extract::State};

/// Ask the kiosk assistant a question
///
/// Canonical questions are answered straight from the canned table without
/// calling the hosted chat API. Everything else goes to the chat-completion
/// API with the system prompt plus the full turn history.
#[utoipa::path(
    post,
    path = "/api/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Answer with source and audio flag", body = ChatResponse),
        (status = 400, description = "Empty question"),
        (status = 502, description = "Hosted chat call failed")
    ),
    tag = "chat"
)]
pub async fn chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>> {
    let message = payload.message.trim().to_string();
    if message.is_empty() {
        return Err(AppError::InvalidInput(
            "Question must not be empty".to_string(),
        ));
    }

    // Canned path: no hosted chat call, answer comes from the fixed table.
    if let Some(answer) = state.faq.lookup(&message) {
        state.session.lock().push_exchange(message.as_str(), answer);
        let audio = super::speak_into_slot(&state, AudioSlot::Chat, answer).await;

        return Ok(Json(ChatResponse {
            reply: answer.to_string(),
            source: AnswerSource::Canned,
            audio,
        }));
    }

    let client = state.assistant_factory.create().await?;

    let mut messages = vec![(
        "system".to_string(),
        state.config.kiosk.system_prompt.clone(),
    )];
    messages.extend(state.session.lock().history_pairs());
    messages.push(("user".to_string(), message.clone()));

    // Turns are appended only after the completion succeeds, so a failed call
    // leaves the history untouched.
    let answer = client.chat(&messages).await?;

    state
        .session
        .lock()
        .push_exchange(message.as_str(), answer.as_str());
    let audio = super::speak_into_slot(&state, AudioSlot::Chat, &answer).await;

    Ok(Json(ChatResponse {
        reply: answer,
        source: AnswerSource::Assistant,
        audio,
    }))
}

/// Get the conversation turns for the current session
#[utoipa::path(
    get,
    path = "/api/history",
    responses(
        (status = 200, description = "Session id and ordered turns", body = HistoryResponse)
    ),
    tag = "chat"
)]
pub async fn history(State(state): State<AppState>) -> Json<HistoryResponse> {
    let session = state.session.lock();

    Json(HistoryResponse {
        session_id: session.session_id(),
        turns: session.turns().to_vec(),
    })
}

/// Clear the conversation and both audio clips
#[utoipa::path(
    post,
    path = "/api/reset",
    responses(
        (status = 200, description = "Session cleared")
    ),
    tag = "chat"
)]
pub async fn reset(State(state): State<AppState>) -> Json<serde_json::Value> {
    state.session.lock().clear();

    Json(serde_json::json!({"success": true}))
}
