use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::StatusCode;
use tokio::sync::watch;

use crate::error::{Error, Result};
use crate::profile::{LogEntry, UserProfile};
use crate::store::ProfileStore;

/// In-process profile store used by tests.
///
/// Mirrors the remote semantics: the log replace requires an existing
/// document, and a failure toggle exercises the persistence-failure path.
pub struct MemoryStore {
    inner: Mutex<Option<UserProfile>>,
    fail_writes: AtomicBool,
    watch_tx: watch::Sender<Option<UserProfile>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        let (watch_tx, _) = watch::channel(None);
        Self {
            inner: Mutex::new(None),
            fail_writes: AtomicBool::new(false),
            watch_tx,
        }
    }

    /// Seed the store with an existing profile.
    pub fn with_profile(profile: UserProfile) -> Self {
        let store = Self::new();
        *store.inner.lock().unwrap() = Some(profile.clone());
        store.notify(Some(profile));
        store
    }

    /// Make every subsequent write fail with a store status.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn check_writable(&self) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            Err(Error::StoreRejected(StatusCode::SERVICE_UNAVAILABLE))
        } else {
            Ok(())
        }
    }

    fn notify(&self, profile: Option<UserProfile>) {
        let _ = self.watch_tx.send(profile);
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn load(&self) -> Result<Option<UserProfile>> {
        Ok(self.inner.lock().unwrap().clone())
    }

    async fn replace(&self, profile: &UserProfile) -> Result<()> {
        self.check_writable()?;
        *self.inner.lock().unwrap() = Some(profile.clone());
        self.notify(Some(profile.clone()));
        Ok(())
    }

    async fn replace_symptoms_log(&self, entries: &[LogEntry]) -> Result<()> {
        self.check_writable()?;
        let mut guard = self.inner.lock().unwrap();
        let profile = guard
            .as_mut()
            .ok_or(Error::StoreRejected(StatusCode::NOT_FOUND))?;
        profile.symptoms_log = entries.to_vec();
        let updated = profile.clone();
        drop(guard);
        self.notify(Some(updated));
        Ok(())
    }

    fn subscribe(&self) -> watch::Receiver<Option<UserProfile>> {
        self.watch_tx.subscribe()
    }
}
