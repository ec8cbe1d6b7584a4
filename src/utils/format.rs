// src/utils/format.rs
use chrono::{DateTime, Local, NaiveTime};

// Wall clock line for the live display, e.g. "02:05:09 PM"
pub fn format_wall_clock(now: DateTime<Local>) -> String {
    now.format("%I:%M:%S %p").to_string()
}

// Long-form date line under the clock, e.g. "Saturday, June 1, 2024"
pub fn format_long_date(now: DateTime<Local>) -> String {
    now.format("%A, %B %-d, %Y").to_string()
}

// 12-hour rendering of a stored HH:MM schedule time, e.g. "9:30 AM".
// Falls back to the raw string if it does not parse.
pub fn to_12_hour(time: &str) -> String {
    match NaiveTime::parse_from_str(time, "%H:%M") {
        Ok(t) => t.format("%-I:%M %p").to_string(),
        Err(_) => time.to_string(),
    }
}

// Truncate a string if it's too long. Counts chars, not bytes, since URLs
// and site names are free-form text and may not be ASCII.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
