//! Shared application state for axum handlers.

use std::sync::Arc;

use gearhub_app::ports::{DeviceRepository, StoreStatistics, UserRepository};
use gearhub_app::services::device_service::DeviceService;
use gearhub_app::services::stats_service::StatsService;
use gearhub_app::services::user_service::UserService;

/// Application state shared across all axum handlers.
///
/// Generic over the user repository, device repository and statistics source
/// to avoid dynamic dispatch. `Clone` is implemented manually so the
/// underlying types themselves do not need to be `Clone` — only the `Arc`
/// wrappers are cloned.
pub struct AppState<UR, DR, SR> {
    /// User registration and maintenance.
    pub user_service: Arc<UserService<UR>>,
    /// Device registration and listing.
    pub device_service: Arc<DeviceService<DR>>,
    /// Per-table record counts.
    pub stats_service: Arc<StatsService<SR>>,
}

impl<UR, DR, SR> Clone for AppState<UR, DR, SR> {
    fn clone(&self) -> Self {
        Self {
            user_service: Arc::clone(&self.user_service),
            device_service: Arc::clone(&self.device_service),
            stats_service: Arc::clone(&self.stats_service),
        }
    }
}

impl<UR, DR, SR> AppState<UR, DR, SR>
where
    UR: UserRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
    SR: StoreStatistics + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        user_service: UserService<UR>,
        device_service: DeviceService<DR>,
        stats_service: StatsService<SR>,
    ) -> Self {
        Self {
            user_service: Arc::new(user_service),
            device_service: Arc::new(device_service),
            stats_service: Arc::new(stats_service),
        }
    }
}
