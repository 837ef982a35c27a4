use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::profile::UserProfile;
use crate::services::cycle::{self, CycleProjection};
use crate::services::pregnancy::{self, PregnancyProjection};

/// Read-only projections for the Today and Calendar screens. A suppressed
/// projection becomes `IncompleteProfile` so the screen can show a
/// corrective message instead of numbers.

pub fn cycle_overview(profile: &UserProfile, today: NaiveDate) -> Result<CycleProjection> {
    cycle::project(profile, today).ok_or(Error::IncompleteProfile)
}

pub fn pregnancy_overview(profile: &UserProfile, today: NaiveDate) -> Result<PregnancyProjection> {
    pregnancy::project(profile, today).ok_or(Error::IncompleteProfile)
}
