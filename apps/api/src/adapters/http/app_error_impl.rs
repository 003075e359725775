use crate::app_error::AppError;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ecoai_types::{ErrorDetail, ValidationIssue, ValidationIssues};

const WAITLIST_FAILED_DETAIL: &str = "Failed to add to waitlist";
const INTERNAL_DETAIL: &str = "Internal server error";
const NOT_FOUND_DETAIL: &str = "Not Found";
const METHOD_NOT_ALLOWED_DETAIL: &str = "Method Not Allowed";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Client mistakes are not server faults; keep them out of the error log.
        match &self {
            AppError::Validation(_) | AppError::NotFound | AppError::MethodNotAllowed => {
                tracing::debug!(error = ?self, "Request rejected")
            }
            AppError::WaitlistFailed(_) | AppError::Internal(_) => {
                tracing::error!(error = ?self, "Request failed")
            }
        }

        match self {
            AppError::Validation(issues) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationIssues { detail: issues }),
            )
                .into_response(),
            AppError::WaitlistFailed(_) => {
                detail_resp(StatusCode::INTERNAL_SERVER_ERROR, WAITLIST_FAILED_DETAIL)
            }
            AppError::NotFound => detail_resp(StatusCode::NOT_FOUND, NOT_FOUND_DETAIL),
            AppError::MethodNotAllowed => {
                detail_resp(StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED_DETAIL)
            }
            AppError::Internal(_) => {
                detail_resp(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_DETAIL)
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let issue = match &rejection {
            JsonRejection::JsonDataError(err) => {
                ValidationIssue::body(err.body_text(), "type_error")
            }
            JsonRejection::JsonSyntaxError(err) => {
                ValidationIssue::body(err.body_text(), "value_error.jsondecode")
            }
            JsonRejection::MissingJsonContentType(err) => {
                ValidationIssue::body(err.body_text(), "value_error.content_type")
            }
            other => ValidationIssue::body(other.body_text(), "value_error"),
        };
        AppError::Validation(vec![issue])
    }
}

fn detail_resp(status: StatusCode, detail: &str) -> Response {
    let body = ErrorDetail {
        detail: detail.to_string(),
    };
    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_unprocessable_entity() {
        let response = AppError::invalid_field("email", "field required", "value_error.missing")
            .into_response();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn waitlist_failure_maps_to_internal_error() {
        let response = AppError::WaitlistFailed("disk full".into()).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn not_found_maps_to_404() {
        let response = AppError::NotFound.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn method_not_allowed_maps_to_405() {
        let response = AppError::MethodNotAllowed.into_response();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[test]
    fn internal_maps_to_500() {
        let response = AppError::Internal("boom".into()).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
