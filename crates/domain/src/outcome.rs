//! Outcome — the `(ok, message)` pair reported back to callers.

use serde::{Deserialize, Serialize};

use crate::error::GearHubError;

/// Success flag plus a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub ok: bool,
    pub message: String,
}

impl Outcome {
    /// A successful outcome with a confirmation message.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    /// A failed outcome with an explanation.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

impl From<&GearHubError> for Outcome {
    fn from(err: &GearHubError) -> Self {
        Self::failure(err.to_string())
    }
}
