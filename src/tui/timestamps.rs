use chrono::{DateTime, Datelike, Utc};

/// Describe when the record cache was last refreshed, relative to now
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    format_timestamp_at(timestamp, &Utc::now())
}

/// Tiered display:
/// - Under a minute: "just now"
/// - Under a day: "5m ago", "3h ago"
/// - Older: "on Jan 15", or "on Dec 3, 2024" for another year
pub fn format_timestamp_at(timestamp: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let seconds = now.signed_duration_since(*timestamp).num_seconds().max(0);
    let minutes = seconds / 60;
    let hours = minutes / 60;

    if minutes == 0 {
        "just now".to_string()
    } else if hours == 0 {
        format!("{}m ago", minutes)
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else if timestamp.year() == now.year() {
        timestamp.format("on %b %-d").to_string()
    } else {
        timestamp.format("on %b %-d, %Y").to_string()
    }
}
