use chrono::NaiveDate;
use serde::Serialize;

use crate::profile::UserProfile;
use crate::services::dates;

/// Full term, counted back from the due date to estimate conception.
pub const FULL_TERM_DAYS: i64 = 280; // 40 weeks

/// Derived gestational progress. Recomputed on every read, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PregnancyProjection {
    pub gestational_week: i64,
    /// Days past the last full week, 0..=6.
    pub extra_days: i64,
}

/// Derive gestational week and day from the due date.
///
/// Returns None when the due date is missing or unparseable. The day count
/// uses the absolute difference from the conception estimate; a due date
/// past term still yields a plausible-looking week count (unguarded, the
/// intended behavior for out-of-range dates is unspecified).
pub fn project(profile: &UserProfile, today: NaiveDate) -> Option<PregnancyProjection> {
    let due = dates::parse_iso(profile.pregnancy_due_date.as_deref()?)?;
    let conception_estimate = dates::add_days(due, -FULL_TERM_DAYS);
    let days_pregnant = dates::days_between(conception_estimate, today).abs();
    Some(PregnancyProjection {
        gestational_week: (days_pregnant + 6) / 7, // ceil
        extra_days: days_pregnant % 7,
    })
}
