//! User — a person who can be made responsible for devices.

use serde::{Deserialize, Serialize};

use crate::error::{GearHubError, ValidationError};

/// A registered user, keyed by normalized email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub name: String,
}

impl User {
    /// Create a builder for constructing a [`User`].
    #[must_use]
    pub fn builder() -> UserBuilder {
        UserBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// Required fields are checked before the email format.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingFields`] when `email` or `name` is
    /// blank, and [`ValidationError::InvalidEmail`] when `email` has no `@`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.email.trim().is_empty() || self.name.trim().is_empty() {
            return Err(ValidationError::MissingFields);
        }
        if !self.email.contains('@') {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }
}

/// Trim surrounding whitespace and lowercase an email address.
#[must_use]
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Step-by-step builder for [`User`].
#[derive(Debug, Default)]
pub struct UserBuilder {
    email: Option<String>,
    name: Option<String>,
}

impl UserBuilder {
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Consume the builder, validate, normalize and return a [`User`].
    ///
    /// # Errors
    ///
    /// Returns [`GearHubError::Validation`] if a field is missing or the
    /// email is malformed.
    pub fn build(self) -> Result<User, GearHubError> {
        let raw = User {
            email: self.email.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
        };
        raw.validate()?;
        Ok(User {
            email: normalize_email(&raw.email),
            name: raw.name.trim().to_string(),
        })
    }
}
