use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};

use crate::adapters::http::app_state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/stats", get(stats))
}

async fn health(State(app_state): State<AppState>) -> impl IntoResponse {
    Json(app_state.service_info_use_cases.health())
}

async fn stats(State(app_state): State<AppState>) -> impl IntoResponse {
    Json(app_state.service_info_use_cases.stats())
}
