use crate::error::Result;
use crate::profile::{LogEntry, UserProfile};
use crate::store::ProfileStore;

/// Upsert for the symptoms log, keyed by calendar date.
///
/// The at-most-one-entry-per-date invariant is enforced here at write
/// time, not by the store. Two clients editing the same date race and the
/// last writer wins; there is no optimistic concurrency check and no
/// merge of sub-fields.

/// Replace any entry with the same date and append the new one.
pub fn merge_entry(log: &[LogEntry], entry: LogEntry) -> Vec<LogEntry> {
    let mut merged: Vec<LogEntry> = log
        .iter()
        .filter(|existing| existing.date != entry.date)
        .cloned()
        .collect();
    merged.push(entry);
    merged
}

/// Merge the entry into the profile's log and persist the entire updated
/// array. A persistence failure comes back as a store status and is never
/// retried automatically; the caller may prompt a manual retry.
pub async fn save_entry(
    store: &dyn ProfileStore,
    profile: &UserProfile,
    entry: LogEntry,
) -> Result<Vec<LogEntry>> {
    let merged = merge_entry(&profile.symptoms_log, entry);
    store.replace_symptoms_log(&merged).await?;
    log::info!("daily log saved ({} entries)", merged.len());
    Ok(merged)
}
