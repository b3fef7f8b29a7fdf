use crate::{
    AppState,
    session::AudioSlot,
    types::{AppError, Result, VisionMode, VisionRequest, VisionResponse},
};
use axum::{Json, extract::State};
use base64::{Engine as _, engine::general_purpose};

/// Interpret a camera snapshot
///
/// The snapshot is sent to the hosted vision API with a fixed prompt chosen by
/// the mode (room description, ASL letter, ASL word). The description is also
/// synthesized into the vision audio slot. Snapshot results are not part of
/// the conversation history.
#[utoipa::path(
    post,
    path = "/api/vision",
    request_body = VisionRequest,
    responses(
        (status = 200, description = "Snapshot description with audio flag", body = VisionResponse),
        (status = 400, description = "Invalid base64 image or unknown mode"),
        (status = 502, description = "Hosted vision call failed")
    ),
    tag = "vision"
)]
pub async fn interpret(
    State(state): State<AppState>,
    Json(payload): Json<VisionRequest>,
) -> Result<Json<VisionResponse>> {
    let mode: VisionMode = payload.mode.parse()?;
    let image = decode_snapshot(&payload.image)?;

    let client = state.assistant_factory.create().await?;
    let description = client.describe_image(mode.prompt(), &image).await?;

    let audio = super::speak_into_slot(&state, AudioSlot::Vision, &description).await;

    Ok(Json(VisionResponse { description, audio }))
}

/// Decode the base64 snapshot payload, tolerating a data-URL prefix.
fn decode_snapshot(payload: &str) -> Result<Vec<u8>> {
    let trimmed = payload.trim();
    let encoded = trimmed
        .strip_prefix("data:image/jpeg;base64,")
        .unwrap_or(trimmed);

    let bytes = general_purpose::STANDARD
        .decode(encoded)
        .map_err(|e| AppError::InvalidInput(format!("Image is not valid base64: {}", e)))?;

    if bytes.is_empty() {
        return Err(AppError::InvalidInput(
            "Image must not be empty".to_string(),
        ));
    }

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_plain_base64() {
        let bytes = decode_snapshot("aGVsbG8=").unwrap();
        assert_eq!(bytes, b"hello");
    }

    #[test]
    fn decodes_data_url_payload() {
        let bytes = decode_snapshot("data:image/jpeg;base64,aGVsbG8=").unwrap();
        assert_eq!(bytes, b"hello");
    }

    #[test]
    fn rejects_invalid_base64() {
        assert!(decode_snapshot("not base64!!!").is_err());
    }

    #[test]
    fn rejects_empty_payload() {
        assert!(decode_snapshot("").is_err());
    }
}
