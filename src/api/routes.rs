use crate::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Build the kiosk router: the page at `/` and the JSON API under `/api`.
pub fn create_router() -> Router<AppState> {
    let api_routes = Router::new()
        .route("/health", get(crate::api::handlers::info::health))
        .route("/questions", get(crate::api::handlers::info::questions))
        .route("/chat", post(crate::api::handlers::chat::chat))
        .route("/history", get(crate::api::handlers::chat::history))
        .route("/reset", post(crate::api::handlers::chat::reset))
        .route("/vision", post(crate::api::handlers::vision::interpret))
        .route("/audio/chat", get(crate::api::handlers::audio::chat_audio))
        .route(
            "/audio/vision",
            get(crate::api::handlers::audio::vision_audio),
        );

    Router::new()
        .route("/", get(crate::api::handlers::info::kiosk_page))
        .nest("/api", api_routes)
}
