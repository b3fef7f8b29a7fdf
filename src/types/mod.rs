//! Core types (requests, responses, errors) shared across the kiosk server.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============= API Request/Response Types =============

/// A visitor question for the kiosk assistant.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatRequest {
    /// The question text
    pub message: String,
}

/// Answer to a visitor question.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatResponse {
    /// The assistant's answer (canned or generated)
    pub reply: String,
    /// Where the answer came from
    pub source: AnswerSource,
    /// Whether a spoken clip is ready at `/api/audio/chat`
    pub audio: bool,
}

/// Origin of a chat answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AnswerSource {
    /// Served from the canned question table, no hosted call made
    Canned,
    /// Generated by the hosted chat-completion API
    Assistant,
}

/// A camera snapshot to interpret.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VisionRequest {
    /// What to ask about the snapshot: `room`, `asl_letter`, or `asl_word`
    pub mode: String,
    /// Base64-encoded JPEG bytes
    pub image: String,
}

/// Snapshot interpretation modes offered on the kiosk page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum VisionMode {
    /// Describe the room for a visually impaired visitor
    Room,
    /// Identify the ASL letter being signed
    AslLetter,
    /// Interpret the ASL word or phrase being signed
    AslWord,
}

impl std::str::FromStr for VisionMode {
    type Err = AppError;

    fn from_str(s: &str) -> std::result::Result<Self, AppError> {
        match s {
            "room" => Ok(VisionMode::Room),
            "asl_letter" => Ok(VisionMode::AslLetter),
            "asl_word" => Ok(VisionMode::AslWord),
            other => Err(AppError::InvalidInput(format!(
                "Unknown vision mode '{}'. Supported: room, asl_letter, asl_word",
                other
            ))),
        }
    }
}

impl VisionMode {
    /// The fixed prompt sent to the vision model for this mode.
    pub fn prompt(self) -> &'static str {
        match self {
            VisionMode::Room => "Describe this image in detail to a visually impaired person.",
            VisionMode::AslLetter => {
                "What ASL letter is the person showing in this image? \
                 Only describe the letter being signed."
            }
            VisionMode::AslWord => {
                "What ASL word or phrase is the person signing in this image? \
                 Be clear and concise in the interpretation."
            }
        }
    }
}

/// Result of interpreting a camera snapshot.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VisionResponse {
    /// The model's description of the snapshot
    pub description: String,
    /// Whether a spoken clip is ready at `/api/audio/vision`
    pub audio: bool,
}

/// The current session's conversation.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HistoryResponse {
    /// Identifier of the current kiosk session (rotates on reset)
    pub session_id: uuid::Uuid,
    /// Conversation turns in append order
    pub turns: Vec<Turn>,
}

// ============= Conversation Types =============

/// One message in the visible conversation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Turn {
    /// Who said it
    pub role: Role,
    /// Message text
    pub content: String,
    /// When the turn was appended
    pub timestamp: DateTime<Utc>,
}

impl Turn {
    /// Create a turn stamped with the current time.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Speaker of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The visitor
    User,
    /// The kiosk assistant
    Assistant,
}

impl Role {
    /// Wire name used when forwarding turns to the chat-completion API.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

// ============= Error Types =============

/// Errors surfaced to the kiosk page, one kind per call site.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Hosted chat-completion call failed
    #[error("Chat completion error: {0}")]
    Chat(String),

    /// Hosted vision call failed
    #[error("Vision error: {0}")]
    Vision(String),

    /// Hosted text-to-speech call failed
    #[error("Speech synthesis error: {0}")]
    Speech(String),

    /// Request payload was rejected before any hosted call
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Requested resource does not exist (yet)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Server-side configuration problem
    #[error("Configuration error: {0}")]
    Config(String),

    /// Anything else
    #[error("Internal error: {0}")]
    Internal(String),
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::http::StatusCode;

        let (status, message) = match self {
            AppError::Chat(msg) => (StatusCode::BAD_GATEWAY, msg),
            AppError::Vision(msg) => (StatusCode::BAD_GATEWAY, msg),
            AppError::Speech(msg) => (StatusCode::BAD_GATEWAY, msg),
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Config(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = serde_json::json!({
            "error": message
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vision_mode_serde_names() {
        let mode: VisionMode = serde_json::from_str("\"asl_letter\"").unwrap();
        assert_eq!(mode, VisionMode::AslLetter);
        assert_eq!(serde_json::to_string(&VisionMode::Room).unwrap(), "\"room\"");
    }

    #[test]
    fn vision_mode_parses_known_names() {
        assert_eq!("room".parse::<VisionMode>().unwrap(), VisionMode::Room);
        assert_eq!(
            "asl_word".parse::<VisionMode>().unwrap(),
            VisionMode::AslWord
        );
    }

    #[test]
    fn unknown_vision_mode_is_invalid_input() {
        let err = match "thermal".parse::<VisionMode>() {
            Ok(_) => panic!("Expected error"),
            Err(e) => e,
        };
        assert!(matches!(err, AppError::InvalidInput(_)));
        assert!(err.to_string().contains("thermal"));
    }

    #[test]
    fn vision_prompts_are_mode_specific() {
        assert!(VisionMode::Room.prompt().contains("visually impaired"));
        assert!(VisionMode::AslLetter.prompt().contains("ASL letter"));
        assert!(VisionMode::AslWord.prompt().contains("ASL word"));
    }

    #[test]
    fn role_wire_names() {
        assert_eq!(Role::User.as_str(), "user");
        assert_eq!(Role::Assistant.as_str(), "assistant");
    }
}
