use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::profile::{LogEntry, UserProfile};
use crate::services::dates;
use crate::store::{daily_log, ProfileStore};

/// Daily logger commands.

/// The entry the logger should open with for `today`: the saved one when
/// it exists, otherwise a blank entry for the date.
pub fn today_entry(profile: &UserProfile, today: NaiveDate) -> LogEntry {
    let key = dates::format_iso(today);
    profile
        .log_for(&key)
        .cloned()
        .unwrap_or_else(|| LogEntry::blank(key))
}

/// Upsert one day's entry and persist the whole log array.
pub async fn save_daily_log(
    store: &dyn ProfileStore,
    profile: &UserProfile,
    entry: LogEntry,
) -> Result<Vec<LogEntry>> {
    if dates::parse_iso(&entry.date).is_none() {
        return Err(Error::invalid_input("date", "must be a YYYY-MM-DD date"));
    }
    daily_log::save_entry(store, profile, entry).await
}
