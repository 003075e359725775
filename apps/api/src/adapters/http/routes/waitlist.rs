use axum::{Json, Router, extract::State, response::IntoResponse, routing::post};
use axum_extra::extract::WithRejection;
use ecoai_types::{WaitlistData, WaitlistEntry, WaitlistResponse};

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
    use_cases::waitlist::WAITLIST_SUCCESS_MESSAGE,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/waitlist", post(join_waitlist))
}

async fn join_waitlist(
    State(app_state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<WaitlistEntry>, AppError>,
) -> AppResult<impl IntoResponse> {
    let submission = app_state.waitlist_use_cases.join(payload).await?;

    Ok(Json(WaitlistResponse {
        success: true,
        message: WAITLIST_SUCCESS_MESSAGE.to_string(),
        data: WaitlistData {
            email: submission.email,
            company: submission.company,
            name: submission.name,
        },
    }))
}
