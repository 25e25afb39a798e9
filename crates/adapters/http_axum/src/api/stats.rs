//! JSON handler for store statistics.

use axum::Json;
use axum::extract::State;

use gearhub_app::ports::{DeviceRepository, StoreStatistics, UserRepository};
use gearhub_domain::stats::StoreStats;

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /api/stats`
pub async fn get<UR, DR, SR>(
    State(state): State<AppState<UR, DR, SR>>,
) -> Result<Json<StoreStats>, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
    SR: StoreStatistics + Send + Sync + 'static,
{
    let stats = state.stats_service.stats().await?;
    Ok(Json(stats))
}
