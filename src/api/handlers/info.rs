use crate::AppState;
use axum::{Json, extract::State, response::Html};

/// The single-screen kiosk page, embedded at compile time.
const KIOSK_PAGE: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/kiosk.html"));

/// Serve the kiosk page.
pub async fn kiosk_page() -> Html<&'static str> {
    Html(KIOSK_PAGE)
}

/// Health check
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Server is up")
    ),
    tag = "info"
)]
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// List the canned quick questions
#[utoipa::path(
    get,
    path = "/api/questions",
    responses(
        (status = 200, description = "Canonical questions in table order", body = Vec<String>)
    ),
    tag = "info"
)]
pub async fn questions(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(
        state
            .faq
            .questions()
            .into_iter()
            .map(String::from)
            .collect(),
    )
}
