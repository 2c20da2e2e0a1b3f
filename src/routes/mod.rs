// src/routes/mod.rs
pub mod chat;

use crate::state::SharedState;
use axum::{
    Router,
    extract::State,
    response::Html,
    routing::{get, post},
};
use chat::chat_handler;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/chat", post(chat_handler))
        .route("/health", get(|| async { "OK" }))
        .fallback_service(ServeDir::new("public"))
        .layer(TraceLayer::new_for_http())
}

// Landing page; shows a banner while the API key is unconfigured.
async fn index_handler(State(state): State<SharedState>) -> Html<String> {
    Html(render_index(state.config.missing_key_warning()))
}

fn render_index(warning: Option<&str>) -> String {
    let banner = warning
        .map(|text| format!(r#"<div class="warning">{text}</div>"#))
        .unwrap_or_default();
    INDEX_TEMPLATE.replace("<!-- WARNING -->", &banner)
}
