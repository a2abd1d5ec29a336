//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Milliseconds since the Unix epoch, the unit of plot cache-busting tokens.
#[must_use]
pub fn now_millis() -> i64 {
    now().timestamp_millis()
}
