use chrono::{Duration, Local, NaiveDate};

/// Date arithmetic and formatting helpers shared by the projectors.
/// All comparisons operate on whole calendar days; `NaiveDate` carries no
/// time-of-day, so values are midnight-normalized by construction.

/// Shift a date by a signed number of days.
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date + Duration::days(days)
}

/// Signed whole-day difference, positive when `to` is after `from`.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Parse a stored `YYYY-MM-DD` string. Returns None for anything else.
pub fn parse_iso(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Format for storage, `YYYY-MM-DD`.
pub fn format_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Format for display, e.g. "January 15, 2024".
pub fn format_display(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Display formatting for a stored date string; "N/A" when missing or bad.
pub fn display_or_na(value: Option<&str>) -> String {
    value
        .and_then(parse_iso)
        .map(format_display)
        .unwrap_or_else(|| "N/A".to_string())
}

/// Today's local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
