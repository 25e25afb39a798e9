//! JSON REST handlers for devices.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use gearhub_app::ports::{DeviceRepository, StoreStatistics, UserRepository};
use gearhub_domain::device::{Device, DeviceRegistration};
use gearhub_domain::outcome::Outcome;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Device>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Outcome>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /api/devices`
pub async fn list<UR, DR, SR>(
    State(state): State<AppState<UR, DR, SR>>,
) -> Result<ListResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
    SR: StoreStatistics + Send + Sync + 'static,
{
    let devices = state.device_service.list_all().await?;
    Ok(ListResponse::Ok(Json(devices)))
}

/// `POST /api/devices`
pub async fn create<UR, DR, SR>(
    State(state): State<AppState<UR, DR, SR>>,
    payload: Result<Json<DeviceRegistration>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
    SR: StoreStatistics + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let outcome = state.device_service.register(req).await?;
    Ok(CreateResponse::Created(Json(outcome)))
}
