//! Canonical text forms for dates and timestamps stored in `TEXT` columns.

use chrono::{DateTime, SecondsFormat, Utc};

use gearhub_domain::time::{Date, Timestamp};

use crate::error::decode_error;

pub(crate) fn encode_date(date: Date) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub(crate) fn decode_date(text: &str) -> Result<Date, sqlx::Error> {
    text.parse().map_err(decode_error)
}

pub(crate) fn encode_timestamp(ts: Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub(crate) fn decode_timestamp(text: &str) -> Result<Timestamp, sqlx::Error> {
    DateTime::parse_from_rfc3339(text)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(decode_error)
}
