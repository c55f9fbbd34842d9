//! Display formatting for durations, dates and sizes.

use chrono::{DateTime, Duration as ChronoDuration, Local, NaiveDateTime, TimeZone};
use std::time::Duration;

/// Recording timer: `M:SS`, or `H:MM:SS` from the first hour on.
pub fn timer(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

/// Meeting length in the list: `N min`, or `Hh Mm` past an hour.
pub fn list_duration(seconds: u64) -> String {
    let mins = seconds / 60;
    if mins < 60 {
        return format!("{} min", mins);
    }
    format!("{}h {}m", mins / 60, mins % 60)
}

/// Meeting length on the details screen: `M min S sec` or `S sec`.
pub fn detail_duration(seconds: u64) -> String {
    let mins = seconds / 60;
    let secs = seconds % 60;
    if mins > 0 {
        format!("{} min {} sec", mins, secs)
    } else {
        format!("{} sec", secs)
    }
}

/// Parse a backend timestamp. Accepts RFC 3339 and naive ISO-8601 (taken as
/// local time).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Local>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .and_then(|naive| Local.from_local_datetime(&naive).earliest())
}

fn clock_time(dt: &DateTime<Local>) -> String {
    dt.format("%-I:%M %p").to_string()
}

/// Relative date for the meetings list: `Today, 9:05 AM`,
/// `Yesterday, 9:05 AM`, otherwise `Oct 3, 9:05 AM`.
pub fn relative_date(raw: &str, now: DateTime<Local>) -> String {
    let Some(dt) = parse_timestamp(raw) else {
        return raw.to_string();
    };

    let today = now.date_naive();
    let yesterday = today - ChronoDuration::days(1);

    if dt.date_naive() == today {
        format!("Today, {}", clock_time(&dt))
    } else if dt.date_naive() == yesterday {
        format!("Yesterday, {}", clock_time(&dt))
    } else {
        format!("{}, {}", dt.format("%b %-d"), clock_time(&dt))
    }
}

/// Absolute date with year, used for email delivery stamps.
pub fn absolute_date(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => format!("{}, {}", dt.format("%b %-d, %Y"), clock_time(&dt)),
        None => raw.to_string(),
    }
}

/// Megabytes with one decimal.
pub fn megabytes(mb: f64) -> String {
    format!("{:.1} MB", mb)
}

/// Free space summary for the home screen.
pub fn storage_free(used_mb: f64, total_mb: f64) -> String {
    let free_gb = ((total_mb - used_mb).max(0.0)) / 1000.0;
    format!("{:.1} GB free of {:.0} GB", free_gb, total_mb / 1000.0)
}
