// Profile store: one JSON document per user in a remote document store,
// read through a subscription and written with whole-document or
// whole-array replaces. No locking, no transactions; concurrent writers
// race and the last write observed by the store wins.

pub mod daily_log;
pub mod memory;
pub mod remote;

use async_trait::async_trait;
use tokio::sync::watch;

use crate::error::Result;
use crate::profile::{LogEntry, UserProfile};

pub use memory::MemoryStore;
pub use remote::RemoteStore;

/// Handle to one user's profile document.
///
/// Constructed explicitly and passed to the components that need it;
/// there is no process-wide store handle.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetch the current profile document, None if it does not exist yet.
    async fn load(&self) -> Result<Option<UserProfile>>;

    /// Replace the whole document (onboarding completion).
    async fn replace(&self, profile: &UserProfile) -> Result<()>;

    /// Replace only the symptoms log array, leaving other fields untouched.
    async fn replace_symptoms_log(&self, entries: &[LogEntry]) -> Result<()>;

    /// Receiver that observes profile changes.
    ///
    /// The remote implementation feeds this from a poller; the in-memory
    /// implementation notifies on every write.
    fn subscribe(&self) -> watch::Receiver<Option<UserProfile>>;
}
