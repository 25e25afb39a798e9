//! Time and timestamp helpers.

use chrono::{DateTime, NaiveDate, SubsecRound, Utc};

/// UTC timestamp used for `created_at` and `last_update`.
pub type Timestamp = DateTime<Utc>;

/// Calendar date without time zone (maintenance dates, end of life).
pub type Date = NaiveDate;

/// Return the current UTC time, truncated to whole seconds.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now().trunc_subsecs(0)
}
