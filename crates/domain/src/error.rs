//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`GearHubError`]
//! via `#[from]`. Validation, conflict and not-found failures are *expected*:
//! they are reported back to the caller and never mutate state. Storage
//! failures come from the record store and are not part of that contract.

/// Top-level error returned by every application service.
#[derive(Debug, thiserror::Error)]
pub enum GearHubError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Conflict(#[from] ConflictError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl GearHubError {
    /// Whether this is a caller-recoverable failure rather than a store fault.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        !matches!(self, Self::Storage(_))
    }
}

/// Input rejected before touching the store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("please fill in all required fields")]
    MissingFields,

    #[error("invalid email address")]
    InvalidEmail,

    #[error("device id must be a positive number")]
    InvalidDeviceId,

    #[error("maintenance cost must be a non-negative amount")]
    InvalidCost,

    #[error("maintenance interval is out of range")]
    InvalidInterval,
}

/// A unique key is already taken.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConflictError {
    #[error("a user with email '{email}' already exists")]
    DuplicateUser { email: String },

    #[error("a device with id {device_id} already exists")]
    DuplicateDevice { device_id: i64 },
}

/// No record matched the given key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} '{key}' not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_treat_validation_conflict_and_not_found_as_expected() {
        assert!(GearHubError::from(ValidationError::MissingFields).is_expected());
        assert!(
            GearHubError::from(ConflictError::DuplicateDevice { device_id: 7 }).is_expected()
        );
        assert!(
            GearHubError::from(NotFoundError {
                entity: "user",
                key: "a@b.c".to_string(),
            })
            .is_expected()
        );
    }

    #[test]
    fn should_not_treat_storage_errors_as_expected() {
        let err = GearHubError::Storage(Box::new(std::io::Error::other("disk gone")));
        assert!(!err.is_expected());
    }

    #[test]
    fn should_render_human_readable_messages() {
        let err = GearHubError::from(ConflictError::DuplicateUser {
            email: "max@mci.edu".to_string(),
        });
        assert_eq!(err.to_string(), "a user with email 'max@mci.edu' already exists");

        let err = GearHubError::from(NotFoundError {
            entity: "user",
            key: "nobody@mci.edu".to_string(),
        });
        assert_eq!(err.to_string(), "user 'nobody@mci.edu' not found");
    }
}
