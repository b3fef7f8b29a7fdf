//! # Signbot - Open-House Kiosk Assistant
//!
//! A kiosk-style web server for school open houses. One screen, three jobs:
//!
//! 1. **Answer visitor questions** - common questions come from a canned
//!    table; everything else goes to a hosted chat-completion API with the
//!    full conversation history.
//! 2. **Interpret camera snapshots** - describe the room for visually
//!    impaired visitors, or read an ASL letter/word, via a hosted vision API.
//! 3. **Read results aloud** - answers and descriptions are synthesized to
//!    MP3 via a hosted text-to-speech API and served back to the page.
//!
//! The server keeps a single in-memory session (the kiosk is one shared
//! screen): an append-only list of conversation turns plus the two most
//! recently synthesized audio clips. Nothing is persisted; a reset clears
//! everything.
//!
//! ## Quick Start
//!
//! ```bash
//! export OPENAI_API_KEY=sk-...
//! signbot-server --port 3000
//! ```
//!
//! ## Modules
//!
//! - [`api`] - Kiosk page, REST handlers, and routes
//! - [`cli`] - Command-line interface
//! - [`faq`] - Canned question table
//! - [`llm`] - Hosted AI clients (chat, vision, speech)
//! - [`session`] - In-memory kiosk session state
//! - [`types`] - Common types and error handling
//! - [`utils`] - Environment configuration

#![warn(missing_docs)]

/// Kiosk page, HTTP API handlers, and routes.
pub mod api;
/// Command-line interface.
pub mod cli;
/// Canned question table.
pub mod faq;
/// Hosted AI provider clients and abstractions.
pub mod llm;
/// In-memory kiosk session state.
pub mod session;
/// Core types (requests, responses, errors).
pub mod types;
/// Configuration utilities.
pub mod utils;

// Re-export commonly used types
pub use faq::FaqTable;
pub use llm::{AssistantClient, AssistantFactory, Provider, ProviderFactory};
pub use session::{AudioSlot, KioskSession};
pub use types::{AppError, Result};
pub use utils::config::Config;

use parking_lot::Mutex;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Environment configuration
    pub config: Arc<Config>,
    /// Canned question table
    pub faq: Arc<FaqTable>,
    /// Client creation seam for the hosted AI calls
    pub assistant_factory: Arc<dyn AssistantFactory>,
    /// The single kiosk session
    pub session: Arc<Mutex<KioskSession>>,
}
