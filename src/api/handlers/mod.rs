//! Request handlers, one module per kiosk concern.

/// Synthesized clip retrieval.
pub mod audio;
/// Question answering and conversation state.
pub mod chat;
/// Kiosk page, health, and quick questions.
pub mod info;
/// Camera snapshot interpretation.
pub mod vision;

use crate::AppState;
use crate::session::AudioSlot;

/// Synthesize `text` into the given audio slot, returning whether a clip is
/// ready.
///
/// Speech is a best-effort companion to an answer that already succeeded: a
/// synthesis failure clears the slot and is reported as `audio: false` rather
/// than failing the whole request.
pub(crate) async fn speak_into_slot(state: &AppState, slot: AudioSlot, text: &str) -> bool {
    let result = match state.assistant_factory.create().await {
        Ok(client) => client.synthesize(text).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(clip) => {
            state.session.lock().set_audio(slot, Some(clip));
            true
        }
        Err(e) => {
            tracing::warn!("Speech synthesis failed: {}", e);
            state.session.lock().set_audio(slot, None);
            false
        }
    }
}
