/// Utilities for date and time formatting
///
/// Provides consistent timestamp rendering across tables and detail views
use chrono::{DateTime, Local, TimeZone};

/// Format an RFC 3339 timestamp in the browser's local time zone.
/// Example: "2024-03-15T14:02:26.123Z" -> "15.03.2024, 14:02:26" (UTC viewer)
///
/// Unparseable input is returned unchanged.
pub fn format_datetime(raw: &str) -> String {
    format_datetime_in(raw, &Local)
}

/// Same as [`format_datetime`] with an explicit zone.
pub fn format_datetime_in<Tz: TimeZone>(raw: &str, zone: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed
            .with_timezone(zone)
            .format("%d.%m.%Y, %H:%M:%S")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}
