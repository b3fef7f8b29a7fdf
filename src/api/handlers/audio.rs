use crate::{
    AppState,
    session::AudioSlot,
    types::{AppError, Result},
};
use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

/// Get the latest spoken chat answer as MP3
#[utoipa::path(
    get,
    path = "/api/audio/chat",
    responses(
        (status = 200, description = "MP3 bytes", content_type = "audio/mpeg"),
        (status = 404, description = "No clip synthesized yet")
    ),
    tag = "audio"
)]
pub async fn chat_audio(State(state): State<AppState>) -> Result<Response> {
    serve_clip(&state, AudioSlot::Chat)
}

/// Get the latest spoken snapshot description as MP3
#[utoipa::path(
    get,
    path = "/api/audio/vision",
    responses(
        (status = 200, description = "MP3 bytes", content_type = "audio/mpeg"),
        (status = 404, description = "No clip synthesized yet")
    ),
    tag = "audio"
)]
pub async fn vision_audio(State(state): State<AppState>) -> Result<Response> {
    serve_clip(&state, AudioSlot::Vision)
}

fn serve_clip(state: &AppState, slot: AudioSlot) -> Result<Response> {
    let clip = state
        .session
        .lock()
        .audio(slot)
        .map(|bytes| bytes.to_vec())
        .ok_or_else(|| AppError::NotFound("No audio clip synthesized yet".to_string()))?;

    Ok(([(header::CONTENT_TYPE, "audio/mpeg")], clip).into_response())
}
