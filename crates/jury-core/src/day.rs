//! UTC day-key and countdown arithmetic
//!
//! The day boundary is UTC, never local time. Case ids, "today's case"
//! lookups, and the reset countdown all key off the same `YYYY-MM-DD`
//! format; a reimplementation that anchors to local time produces
//! timezone-dependent case mismatches.

use chrono::{DateTime, Duration, NaiveTime, TimeZone, Utc};

/// Format an instant as its UTC calendar date, `YYYY-MM-DD`
pub fn day_key(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d").to_string()
}

/// Day key for the current instant
pub fn today_key() -> String {
    day_key(Utc::now())
}

/// The next UTC midnight strictly after `now`
pub fn next_utc_midnight(now: DateTime<Utc>) -> DateTime<Utc> {
    let tomorrow = now.date_naive().succ_opt().unwrap_or(now.date_naive());
    Utc.from_utc_datetime(&tomorrow.and_time(NaiveTime::MIN))
}

/// Time remaining until the next UTC midnight
pub fn time_until_reset(now: DateTime<Utc>) -> Duration {
    next_utc_midnight(now) - now
}

/// Display countdown, `"Xh Ym"`. Pure and restartable; drives no state.
pub fn format_countdown(now: DateTime<Utc>) -> String {
    let diff = time_until_reset(now);
    format!("{}h {}m", diff.num_hours(), diff.num_minutes() % 60)
}
