//! Device — a piece of equipment with a responsible person and a
//! maintenance schedule.

use chrono::Days;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{GearHubError, ValidationError};
use crate::time::{Date, Timestamp};
use crate::user::normalize_email;

/// A registered device.
///
/// `next_maintenance` is derived once at registration and never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub device_id: i64,
    pub name: String,
    pub responsible_email: String,
    pub first_maintenance: Date,
    pub maintenance_interval_days: u32,
    pub maintenance_cost_eur: f64,
    pub next_maintenance: Date,
    pub end_of_life: Date,
    pub created_at: Timestamp,
    pub last_update: Timestamp,
}

/// Raw registration input, as submitted by a caller.
///
/// Zero, blank and absent values all count as "not filled in".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceRegistration {
    pub device_id: i64,
    pub name: String,
    pub responsible_email: String,
    #[serde(deserialize_with = "blank_as_none")]
    pub first_maintenance: Option<Date>,
    pub maintenance_interval_days: u32,
    pub maintenance_cost_eur: f64,
    #[serde(deserialize_with = "blank_as_none")]
    pub end_of_life: Option<Date>,
}

/// An empty or `null` date field means "not filled in".
fn blank_as_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Date>, D::Error> {
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => text.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Compute the next maintenance date, `None` if it overflows the calendar.
#[must_use]
pub fn next_maintenance(first_maintenance: Date, interval_days: u32) -> Option<Date> {
    first_maintenance.checked_add_days(Days::new(u64::from(interval_days)))
}

impl DeviceRegistration {
    /// Check the input in a fixed order: required fields, then field
    /// values. Uniqueness is the caller's concern.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingFields`] when a required field is
    /// absent or zero, [`ValidationError::InvalidDeviceId`] for a negative
    /// id, [`ValidationError::InvalidCost`] for a negative or non-finite
    /// cost and [`ValidationError::InvalidInterval`] when the next
    /// maintenance date would fall outside the calendar.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.device_id == 0
            || self.name.trim().is_empty()
            || self.responsible_email.trim().is_empty()
            || self.first_maintenance.is_none()
            || self.maintenance_interval_days == 0
            || self.end_of_life.is_none()
        {
            return Err(ValidationError::MissingFields);
        }
        if self.device_id < 0 {
            return Err(ValidationError::InvalidDeviceId);
        }
        if !self.maintenance_cost_eur.is_finite() || self.maintenance_cost_eur < 0.0 {
            return Err(ValidationError::InvalidCost);
        }
        if self.first_maintenance.is_some_and(|first| {
            next_maintenance(first, self.maintenance_interval_days).is_none()
        }) {
            return Err(ValidationError::InvalidInterval);
        }
        Ok(())
    }

    /// Validate, normalize and turn the input into a [`Device`] stamped
    /// with `created_at`.
    ///
    /// # Errors
    ///
    /// Returns [`GearHubError::Validation`] if [`Self::validate`] fails.
    pub fn into_device(self, created_at: Timestamp) -> Result<Device, GearHubError> {
        self.validate()?;
        let (Some(first_maintenance), Some(end_of_life)) =
            (self.first_maintenance, self.end_of_life)
        else {
            return Err(ValidationError::MissingFields.into());
        };
        let next = next_maintenance(first_maintenance, self.maintenance_interval_days)
            .ok_or(ValidationError::InvalidInterval)?;

        Ok(Device {
            device_id: self.device_id,
            name: self.name.trim().to_string(),
            responsible_email: normalize_email(&self.responsible_email),
            first_maintenance,
            maintenance_interval_days: self.maintenance_interval_days,
            maintenance_cost_eur: self.maintenance_cost_eur,
            next_maintenance: next,
            end_of_life,
            created_at,
            last_update: created_at,
        })
    }
}
