//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod devices;
#[allow(clippy::missing_errors_doc)]
pub mod stats;
#[allow(clippy::missing_errors_doc)]
pub mod users;

use axum::Router;
use axum::routing::{get, put};

use gearhub_app::ports::{DeviceRepository, StoreStatistics, UserRepository};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<UR, DR, SR>() -> Router<AppState<UR, DR, SR>>
where
    UR: UserRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
    SR: StoreStatistics + Send + Sync + 'static,
{
    Router::new()
        // Users
        .route(
            "/users",
            get(users::list::<UR, DR, SR>).post(users::create::<UR, DR, SR>),
        )
        .route(
            "/users/{email}",
            put(users::rename::<UR, DR, SR>).delete(users::delete::<UR, DR, SR>),
        )
        // Devices
        .route(
            "/devices",
            get(devices::list::<UR, DR, SR>).post(devices::create::<UR, DR, SR>),
        )
        // Stats
        .route("/stats", get(stats::get::<UR, DR, SR>))
}
