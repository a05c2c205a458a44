use chrono::{DateTime, Utc};
use torrust_tracker_primitives::DurationSinceUnixEpoch;

/// It converts a timestamp to a `DateTime::<Utc>`, for logs.
///
/// Returns `None` if the seconds do not fit in an `i64` or fall outside the
/// range `chrono` can represent.
#[must_use]
pub fn convert_from_timestamp_to_datetime_utc(duration: DurationSinceUnixEpoch) -> Option<DateTime<Utc>> {
    let secs = i64::try_from(duration.as_secs()).ok()?;
    DateTime::from_timestamp(secs, duration.subsec_nanos())
}
