pub mod service_info;
pub mod waitlist;

use axum::Router;

use crate::{adapters::http::app_state::AppState, app_error::AppError};

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(service_info::router())
        .merge(waitlist::router())
        .method_not_allowed_fallback(method_not_allowed)
}

/// Fallback for unmatched paths.
pub async fn not_found() -> AppError {
    AppError::NotFound
}

/// Fallback for known paths hit with an unsupported method.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
