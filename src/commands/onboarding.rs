use crate::error::{Error, Result};
use crate::profile::{Gender, UserProfile};
use crate::services::dates;
use crate::store::ProfileStore;

/// Onboarding completion: validates the collected answers and writes the
/// initial profile document with a full-document replace.

/// Answers collected by the onboarding screens.
///
/// Cycle defaults mirror the form (28-day cycle, 5-day period).
#[derive(Debug, Clone)]
pub struct OnboardingForm {
    pub age: u32,
    pub gender: Gender,
    pub last_period_date: String,
    pub cycle_length: u32,
    pub period_length: u32,
    pub is_pregnant: bool,
    pub pregnancy_due_date: Option<String>,
}

impl Default for OnboardingForm {
    fn default() -> Self {
        Self {
            age: 0,
            gender: Gender::Female,
            last_period_date: String::new(),
            cycle_length: 28,
            period_length: 5,
            is_pregnant: false,
            pregnancy_due_date: None,
        }
    }
}

pub fn validate(form: &OnboardingForm) -> Result<()> {
    if form.age == 0 {
        return Err(Error::invalid_input("age", "age is required"));
    }
    if dates::parse_iso(&form.last_period_date).is_none() {
        return Err(Error::invalid_input(
            "last_period_date",
            "must be a YYYY-MM-DD date",
        ));
    }
    if form.cycle_length == 0 {
        return Err(Error::invalid_input("cycle_length", "must be at least 1 day"));
    }
    if form.period_length == 0 {
        return Err(Error::invalid_input("period_length", "must be at least 1 day"));
    }
    if form.period_length >= form.cycle_length {
        return Err(Error::invalid_input(
            "period_length",
            "must be shorter than the cycle length",
        ));
    }
    if form.is_pregnant {
        let due_ok = form
            .pregnancy_due_date
            .as_deref()
            .and_then(dates::parse_iso)
            .is_some();
        if !due_ok {
            return Err(Error::invalid_input(
                "pregnancy_due_date",
                "a due date is required when pregnant",
            ));
        }
    }
    Ok(())
}

/// Create the profile document, marked onboarded with an empty log.
///
/// A store failure surfaces unchanged so the screen can offer a retry.
pub async fn complete(store: &dyn ProfileStore, form: OnboardingForm) -> Result<UserProfile> {
    validate(&form)?;
    let profile = UserProfile {
        age: form.age,
        gender: form.gender,
        last_period_date: Some(form.last_period_date),
        cycle_length: Some(form.cycle_length),
        period_length: Some(form.period_length),
        is_pregnant: form.is_pregnant,
        pregnancy_due_date: form.pregnancy_due_date.filter(|date| !date.is_empty()),
        onboarded: true,
        symptoms_log: Vec::new(),
    };
    store.replace(&profile).await?;
    log::info!("onboarding complete, profile document created");
    Ok(profile)
}
