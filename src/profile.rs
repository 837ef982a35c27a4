use serde::{Deserialize, Serialize};

/// Gender recorded at onboarding. Stored lowercase in the profile document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
    Other,
}

/// Mood options offered by the daily logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mood {
    Happy,
    Sad,
    Okay,
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Happy => write!(f, "Happy"),
            Self::Sad => write!(f, "Sad"),
            Self::Okay => write!(f, "Okay"),
        }
    }
}

/// Craving categories offered by the daily logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Craving {
    Sweet,
    Sour,
    Spicy,
}

impl std::fmt::Display for Craving {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sweet => write!(f, "Sweet"),
            Self::Sour => write!(f, "Sour"),
            Self::Spicy => write!(f, "Spicy"),
        }
    }
}

/// One day's symptom/mood/craving entry.
///
/// At most one entry exists per calendar date; the upsert policy in
/// `store::daily_log` enforces this at write time, storage does not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub date: String, // YYYY-MM-DD
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub mood: Option<Mood>,
    #[serde(default)]
    pub cravings: Option<Craving>,
}

impl LogEntry {
    /// Blank entry for a date, used when no log exists for it yet.
    pub fn blank(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            symptoms: Vec::new(),
            mood: None,
            cravings: None,
        }
    }
}

/// The per-user profile document.
///
/// One document per user; the sole writer is the client holding that
/// user's session. Field names on the wire are camelCase. Calendar dates
/// are carried as `YYYY-MM-DD` strings and parsed where they are used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub age: u32,
    pub gender: Gender,
    #[serde(default)]
    pub last_period_date: Option<String>,
    #[serde(default)]
    pub cycle_length: Option<u32>,
    #[serde(default)]
    pub period_length: Option<u32>,
    #[serde(default)]
    pub is_pregnant: bool,
    #[serde(default)]
    pub pregnancy_due_date: Option<String>,
    pub onboarded: bool,
    #[serde(default)]
    pub symptoms_log: Vec<LogEntry>,
}

impl UserProfile {
    /// Find the log entry for a calendar date, if one exists.
    pub fn log_for(&self, date: &str) -> Option<&LogEntry> {
        self.symptoms_log.iter().find(|entry| entry.date == date)
    }
}
