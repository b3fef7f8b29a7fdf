//! In-memory kiosk session state.
//!
//! One kiosk screen means one session: the conversation turns and the two most
//! recently synthesized audio clips live here for the lifetime of the process
//! and are discarded on reset. Nothing is persisted.

use crate::types::{Role, Turn};
use uuid::Uuid;

/// Which synthesized clip an audio request refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioSlot {
    /// The clip for the latest chat answer
    Chat,
    /// The clip for the latest snapshot description
    Vision,
}

/// Conversation turns plus the latest synthesized clips.
///
/// Turns are append-only: the only way to remove them is [`KioskSession::clear`],
/// which also drops both audio clips and rotates the session id.
#[derive(Debug)]
pub struct KioskSession {
    session_id: Uuid,
    turns: Vec<Turn>,
    chat_audio: Option<Vec<u8>>,
    vision_audio: Option<Vec<u8>>,
}

impl KioskSession {
    /// A fresh session with a new id and no turns or clips.
    pub fn new() -> Self {
        Self {
            session_id: Uuid::new_v4(),
            turns: Vec::new(),
            chat_audio: None,
            vision_audio: None,
        }
    }

    /// Identifier of this session; changes when the session is cleared.
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// All conversation turns, in append order.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Append one user turn followed by one assistant turn.
    ///
    /// Exchanges are appended atomically so a question never appears in the
    /// history without its answer.
    pub fn push_exchange(&mut self, question: impl Into<String>, answer: impl Into<String>) {
        self.turns.push(Turn::new(Role::User, question));
        self.turns.push(Turn::new(Role::Assistant, answer));
    }

    /// The turn history as (role, content) pairs for the chat-completion call.
    pub fn history_pairs(&self) -> Vec<(String, String)> {
        self.turns
            .iter()
            .map(|t| (t.role.as_str().to_string(), t.content.clone()))
            .collect()
    }

    /// Store (or drop, with `None`) the synthesized clip for a slot.
    pub fn set_audio(&mut self, slot: AudioSlot, clip: Option<Vec<u8>>) {
        match slot {
            AudioSlot::Chat => self.chat_audio = clip,
            AudioSlot::Vision => self.vision_audio = clip,
        }
    }

    /// The stored clip for a slot, if one is ready.
    pub fn audio(&self, slot: AudioSlot) -> Option<&[u8]> {
        match slot {
            AudioSlot::Chat => self.chat_audio.as_deref(),
            AudioSlot::Vision => self.vision_audio.as_deref(),
        }
    }

    /// Drop all turns and both audio clips and start a fresh session.
    pub fn clear(&mut self) {
        self.session_id = Uuid::new_v4();
        self.turns.clear();
        self.chat_audio = None;
        self.vision_audio = None;
    }
}

impl Default for KioskSession {
    fn default() -> Self {
        Self::new()
    }
}
