//! Storage port — repository traits for the record store.
//!
//! Implementations must return records from `get_all` in insertion order and
//! report a taken unique key as [`GearHubError::Conflict`].

use std::future::Future;

use gearhub_domain::device::Device;
use gearhub_domain::error::GearHubError;
use gearhub_domain::stats::StoreStats;
use gearhub_domain::user::User;

/// Repository for persisting and querying [`User`]s, keyed by email.
pub trait UserRepository {
    /// Insert a new user.
    fn create(&self, user: User) -> impl Future<Output = Result<User, GearHubError>> + Send;

    /// Get all users in insertion order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, GearHubError>> + Send;

    /// Find the user whose stored email equals `email` exactly.
    fn find_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<User>, GearHubError>> + Send;

    /// Overwrite the name of the user with the same email.
    fn update(&self, user: User) -> impl Future<Output = Result<User, GearHubError>> + Send;

    /// Remove the user with the given email.
    fn delete(&self, email: &str) -> impl Future<Output = Result<(), GearHubError>> + Send;
}

/// Repository for persisting and querying [`Device`]s, keyed by device id.
pub trait DeviceRepository {
    /// Insert a new device.
    fn create(&self, device: Device) -> impl Future<Output = Result<Device, GearHubError>> + Send;

    /// Get all devices in insertion order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Device>, GearHubError>> + Send;

    /// Find the device with the given id.
    fn find_by_device_id(
        &self,
        device_id: i64,
    ) -> impl Future<Output = Result<Option<Device>, GearHubError>> + Send;
}

/// Record counts across every table of the store.
pub trait StoreStatistics {
    fn stats(&self) -> impl Future<Output = Result<StoreStats, GearHubError>> + Send;
}
