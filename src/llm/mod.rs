//! Hosted AI clients.
//!
//! The kiosk makes three kinds of outbound calls: chat completion over the
//! turn history, vision completion over a camera snapshot, and text-to-speech
//! for reading answers aloud. All three sit behind the [`AssistantClient`]
//! trait so handlers (and tests) never talk to a provider directly.
//!
//! The module follows a factory pattern:
//! - [`AssistantClient`] - the trait every provider implements
//! - [`Provider`] - runtime provider selection
//! - [`AssistantFactory`] / [`ProviderFactory`] - client creation seam
//!
//! Calls are synchronous single shots: no streaming, no retry, no backoff.
//! A failed call surfaces as one error the page shows as an inline banner.

/// Core client trait, provider enum, and factory types.
pub mod client;
/// OpenAI-backed implementation of all three call kinds.
pub mod openai;

pub use client::{AssistantClient, AssistantFactory, Provider, ProviderFactory};
