//! Device service — use-cases for managing devices.

use gearhub_domain::device::{Device, DeviceRegistration};
use gearhub_domain::error::{ConflictError, GearHubError};
use gearhub_domain::outcome::Outcome;
use gearhub_domain::time::now;

use crate::ports::DeviceRepository;

/// Application service for device registration and listing.
pub struct DeviceService<R> {
    repo: R,
}

impl<R: DeviceRepository> DeviceService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Register a new device, deriving its next maintenance date.
    ///
    /// Field validation runs before the uniqueness check on `device_id`.
    /// `responsible_email` is not checked against the registered users.
    ///
    /// # Errors
    ///
    /// Returns [`GearHubError::Validation`] if a required field is missing or
    /// a value is out of range, [`GearHubError::Conflict`] if the device id
    /// is taken, or a storage error propagated from the repository.
    #[tracing::instrument(skip_all, fields(device_id = registration.device_id))]
    pub async fn register(&self, registration: DeviceRegistration) -> Result<Outcome, GearHubError> {
        registration
            .validate()
            .inspect_err(|err| tracing::debug!(error = %err, "rejecting invalid device"))?;

        let device_id = registration.device_id;
        if self.repo.find_by_device_id(device_id).await?.is_some() {
            tracing::debug!("rejecting duplicate device");
            return Err(ConflictError::DuplicateDevice { device_id }.into());
        }

        let device = registration.into_device(now())?;
        let device = self.repo.create(device).await?;
        tracing::info!(
            next_maintenance = %device.next_maintenance,
            "device registered"
        );
        Ok(Outcome::success(format!(
            "device '{}' with id {} added",
            device.name, device.device_id
        )))
    }

    /// List all devices in storage order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_all(&self) -> Result<Vec<Device>, GearHubError> {
        self.repo.get_all().await
    }
}
