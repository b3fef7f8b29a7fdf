//! HTTP API Handlers and Routes
//!
//! This module provides the kiosk page and its JSON API, built on the Axum web
//! framework.
//!
//! # Module Structure
//!
//! - [`api::handlers`](crate::api::handlers) - Request handlers for each endpoint
//! - [`api::routes`](crate::api::routes) - Route definitions and router configuration
//!
//! # Endpoints
//!
//! ## Kiosk page
//! - `GET /` - The single-screen kiosk page
//!
//! ## Chat (`/api/chat`)
//! - `POST /api/chat` - Ask a question (canned lookup or hosted chat)
//! - `GET /api/history` - Conversation turns for the current session
//! - `POST /api/reset` - Clear the conversation and audio clips
//!
//! ## Vision (`/api/vision`)
//! - `POST /api/vision` - Interpret a camera snapshot
//!
//! ## Audio (`/api/audio`)
//! - `GET /api/audio/chat` - Latest spoken chat answer (MP3)
//! - `GET /api/audio/vision` - Latest spoken snapshot description (MP3)
//!
//! ## Misc
//! - `GET /api/questions` - Canned quick questions
//! - `GET /api/health` - Health check endpoint
//!
//! The kiosk is an open installation: there is no authentication layer.
//!
//! # OpenAPI Documentation
//!
//! When the `swagger-ui` feature is enabled, interactive API documentation
//! is available at `/swagger-ui/`.

/// Request and response handlers for all API endpoints.
pub mod handlers;
/// Router configuration and route definitions.
pub mod routes;
