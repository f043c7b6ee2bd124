use chrono::{DateTime, Utc};
use iq_core::model::StartedAt;

#[must_use]
pub fn format_started_at(value: StartedAt) -> String {
    DateTime::<Utc>::from_timestamp_millis(value.millis())
        .map_or_else(|| value.millis().to_string(), |at| at.format("%H:%M:%S UTC").to_string())
}
