//! Unit conversion and display formatting rules
//!
//! These are the rules the current-weather normalizer and the view model
//! apply to upstream values before anything reaches the page.

use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;

use crate::types::ClockTime;

/// Conversion factor from metres per second to kilometres per hour
pub const MPS_TO_KMH: f64 = 3.6;

/// Capitalize the first character, leaving the rest untouched
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Round to the nearest integer, halves away from zero
pub fn round_temp(value: f64) -> i64 {
    value.round() as i64
}

/// Round toward negative infinity
pub fn floor_temp(value: f64) -> i64 {
    value.floor() as i64
}

/// Convert a wind speed from m/s to whole km/h
pub fn mps_to_kmh(speed_mps: f64) -> i64 {
    (speed_mps * MPS_TO_KMH).round() as i64
}

/// Convert a UNIX timestamp to wall-clock time in the given timezone
pub fn clock_from_unix(timestamp: i64, tz: Tz) -> Option<ClockTime> {
    let local = DateTime::from_timestamp(timestamp, 0)?.with_timezone(&tz);
    ClockTime::from_hm(
        chrono::Timelike::hour(&local),
        chrono::Timelike::minute(&local),
    )
}

/// Format a UNIX timestamp as 24-hour `HH:MM` in the given timezone
pub fn format_clock(timestamp: i64, tz: Tz) -> String {
    clock_from_unix(timestamp, tz)
        .map(|t| t.to_string())
        .unwrap_or_else(|| "00:00".to_string())
}

/// Short day label, e.g. `Thu 28.08.`
pub fn short_date_label(date: NaiveDate) -> String {
    date.format("%a %d.%m.").to_string()
}

/// Long day label, e.g. `Thursday, 28. August 2025`
pub fn long_date_label(date: NaiveDate) -> String {
    date.format("%A, %-d. %B %Y").to_string()
}

/// Icon image URL for an upstream icon code
pub fn icon_url(icon: &str) -> String {
    format!("https://openweathermap.org/img/wn/{}@2x.png", icon)
}
