//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use gearhub_domain::error::GearHubError;
use gearhub_domain::outcome::Outcome;

/// Maps [`GearHubError`] and unreadable request bodies to an HTTP response
/// with appropriate status code.
pub enum ApiError {
    Domain(GearHubError),
    Body(JsonRejection),
}

impl From<GearHubError> for ApiError {
    fn from(err: GearHubError) -> Self {
        Self::Domain(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Body(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = match self {
            Self::Domain(err) => err,
            Self::Body(rejection) => {
                tracing::debug!(error = %rejection, "rejecting unreadable request body");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(Outcome::failure(rejection.body_text())),
                )
                    .into_response();
            }
        };

        let status = match &err {
            GearHubError::Validation(_) => StatusCode::BAD_REQUEST,
            GearHubError::Conflict(_) => StatusCode::CONFLICT,
            GearHubError::NotFound(_) => StatusCode::NOT_FOUND,
            GearHubError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(Outcome::failure("internal server error")),
                )
                    .into_response();
            }
        };

        (status, Json(Outcome::from(&err))).into_response()
    }
}
