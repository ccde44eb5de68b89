use chrono::{DateTime, Utc};

/// Converts a UTC timestamp into the seconds-based domain used by time axes.
#[must_use]
pub fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}

/// Rounds halves towards positive infinity, the way canvas hosts snap pixels.
#[must_use]
pub(crate) fn round_px(value: f64) -> f64 {
    (value + 0.5).floor()
}
