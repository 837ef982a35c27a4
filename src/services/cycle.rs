use chrono::NaiveDate;
use serde::Serialize;

use crate::profile::UserProfile;
use crate::services::dates;

/// Cycle forecast derived from the profile and a reference date.
/// Estimates only; none of this is a medical guarantee.

/// Ovulation is assumed 14 days before the next period (luteal phase).
pub const LUTEAL_PHASE_DAYS: i64 = 14;

/// The fertile window opens this many days before ovulation.
pub const FERTILE_WINDOW_DAYS: i64 = 5;

/// Estimated chance of conception on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FertilityLevel {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for FertilityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
        }
    }
}

/// Derived cycle forecast. Recomputed on every read, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleProjection {
    pub next_period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub ovulation_date: NaiveDate,
    pub fertile_start: NaiveDate,
    pub fertile_end: NaiveDate,
    /// 1-indexed; keeps counting past the cycle length when a period is late.
    pub current_cycle_day: i64,
    pub is_in_period: bool,
    pub fertility_level: FertilityLevel,
}

/// Derive the cycle forecast for `today`.
///
/// Returns None when `last_period_date` is missing or unparseable, or when
/// either length field is missing.
pub fn project(profile: &UserProfile, today: NaiveDate) -> Option<CycleProjection> {
    let last_period = dates::parse_iso(profile.last_period_date.as_deref()?)?;
    let cycle_length = i64::from(profile.cycle_length?);
    let period_length = i64::from(profile.period_length?);

    let next_period_start = dates::add_days(last_period, cycle_length);
    let period_end = dates::add_days(last_period, period_length);
    let ovulation_date = dates::add_days(next_period_start, -LUTEAL_PHASE_DAYS);
    let fertile_start = dates::add_days(ovulation_date, -FERTILE_WINDOW_DAYS);
    let fertile_end = ovulation_date;

    let current_cycle_day = dates::days_between(last_period, today) + 1;
    let is_in_period = today >= last_period && today < period_end;

    // Days left until ovulation; negative once it has passed.
    let until_ovulation = dates::days_between(today, ovulation_date);
    let fertility_level = match until_ovulation {
        0..=2 => FertilityLevel::High,
        3..=5 => FertilityLevel::Medium,
        _ => FertilityLevel::Low,
    };

    Some(CycleProjection {
        next_period_start,
        period_end,
        ovulation_date,
        fertile_start,
        fertile_end,
        current_cycle_day,
        is_in_period,
        fertility_level,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Gender;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn profile(last_period: &str, cycle: u32, period: u32) -> UserProfile {
        UserProfile {
            age: 25,
            gender: Gender::Female,
            last_period_date: Some(last_period.to_string()),
            cycle_length: Some(cycle),
            period_length: Some(period),
            is_pregnant: false,
            pregnancy_due_date: None,
            onboarded: true,
            symptoms_log: Vec::new(),
        }
    }

    #[test]
    fn reference_example() {
        // last period 2024-01-01, cycle 28, period 5
        let p = project(&profile("2024-01-01", 28, 5), date(2024, 1, 10)).unwrap();
        assert_eq!(p.period_end, date(2024, 1, 6));
        assert_eq!(p.next_period_start, date(2024, 1, 29));
        assert_eq!(p.ovulation_date, date(2024, 1, 15));
        assert_eq!(p.fertile_start, date(2024, 1, 10));
        assert_eq!(p.fertile_end, date(2024, 1, 15));
    }

    #[test]
    fn ordering_holds_when_period_shorter_than_cycle() {
        for (cycle, period) in [(21u32, 3u32), (28, 5), (35, 8)] {
            let p = project(&profile("2024-01-01", cycle, period), date(2024, 1, 2)).unwrap();
            let last = date(2024, 1, 1);
            assert!(p.period_end > last);
            assert!(p.next_period_start > p.period_end);
            assert_eq!(p.fertile_end, p.ovulation_date);
            assert_eq!(
                p.ovulation_date,
                dates::add_days(p.next_period_start, -LUTEAL_PHASE_DAYS)
            );
        }
    }

    #[test]
    fn fertility_levels_across_the_window() {
        let base = profile("2024-01-01", 28, 5);
        let ovulation = date(2024, 1, 15);
        for offset in -4i64..=8 {
            let today = dates::add_days(ovulation, -offset);
            let level = project(&base, today).unwrap().fertility_level;
            let expected = match offset {
                0..=2 => FertilityLevel::High,
                3..=5 => FertilityLevel::Medium,
                _ => FertilityLevel::Low,
            };
            assert_eq!(level, expected, "offset {offset} days before ovulation");
        }
    }

    #[test]
    fn cycle_day_is_one_indexed_and_unbounded() {
        let base = profile("2024-01-01", 28, 5);
        assert_eq!(
            project(&base, date(2024, 1, 1)).unwrap().current_cycle_day,
            1
        );
        assert_eq!(
            project(&base, date(2024, 1, 28)).unwrap().current_cycle_day,
            28
        );
        // Late period: no wraparound, day count keeps growing.
        assert_eq!(
            project(&base, date(2024, 2, 5)).unwrap().current_cycle_day,
            36
        );
    }

    #[test]
    fn in_period_bounds_are_half_open() {
        let base = profile("2024-01-01", 28, 5);
        assert!(project(&base, date(2024, 1, 1)).unwrap().is_in_period);
        assert!(project(&base, date(2024, 1, 5)).unwrap().is_in_period);
        assert!(!project(&base, date(2024, 1, 6)).unwrap().is_in_period); // period_end excluded
        assert!(!project(&base, date(2023, 12, 31)).unwrap().is_in_period);
    }

    #[test]
    fn missing_or_bad_fields_suppress_projection() {
        let today = date(2024, 1, 10);

        let mut p = profile("2024-01-01", 28, 5);
        p.last_period_date = None;
        assert!(project(&p, today).is_none());

        let mut p = profile("not-a-date", 28, 5);
        assert!(project(&p, today).is_none());
        p.last_period_date = Some("2024-01-01".to_string());
        p.cycle_length = None;
        assert!(project(&p, today).is_none());

        let mut p = profile("2024-01-01", 28, 5);
        p.period_length = None;
        assert!(project(&p, today).is_none());
    }
}
