//! JSON REST handlers for users.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use gearhub_app::ports::{DeviceRepository, StoreStatistics, UserRepository};
use gearhub_domain::outcome::Outcome;
use gearhub_domain::user::User;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for registering a user. Absent fields count as empty.
#[derive(Deserialize, Default)]
#[serde(default)]
pub struct RegisterUserRequest {
    pub email: String,
    pub name: String,
}

/// Request body for renaming a user.
#[derive(Deserialize, Default)]
#[serde(default)]
pub struct RenameUserRequest {
    pub name: String,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<User>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the mutating endpoints.
pub enum OutcomeResponse {
    Created(Json<Outcome>),
    Ok(Json<Outcome>),
}

impl IntoResponse for OutcomeResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/users`
pub async fn list<UR, DR, SR>(
    State(state): State<AppState<UR, DR, SR>>,
) -> Result<ListResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
    SR: StoreStatistics + Send + Sync + 'static,
{
    let users = state.user_service.list_all().await?;
    Ok(ListResponse::Ok(Json(users)))
}

/// `POST /api/users`
pub async fn create<UR, DR, SR>(
    State(state): State<AppState<UR, DR, SR>>,
    payload: Result<Json<RegisterUserRequest>, JsonRejection>,
) -> Result<OutcomeResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
    SR: StoreStatistics + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let outcome = state.user_service.register(&req.email, &req.name).await?;
    Ok(OutcomeResponse::Created(Json(outcome)))
}

/// `PUT /api/users/{email}`
pub async fn rename<UR, DR, SR>(
    State(state): State<AppState<UR, DR, SR>>,
    Path(email): Path<String>,
    payload: Result<Json<RenameUserRequest>, JsonRejection>,
) -> Result<OutcomeResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
    SR: StoreStatistics + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let outcome = state
        .user_service
        .rename_by_email(&email, &req.name)
        .await?;
    Ok(OutcomeResponse::Ok(Json(outcome)))
}

/// `DELETE /api/users/{email}`
pub async fn delete<UR, DR, SR>(
    State(state): State<AppState<UR, DR, SR>>,
    Path(email): Path<String>,
) -> Result<OutcomeResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
    SR: StoreStatistics + Send + Sync + 'static,
{
    let outcome = state.user_service.delete_by_email(&email).await?;
    Ok(OutcomeResponse::Ok(Json(outcome)))
}
