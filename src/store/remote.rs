use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::json;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::error::{Error, Result};
use crate::profile::{LogEntry, UserProfile};
use crate::store::ProfileStore;

/// HTTP-backed profile store.
///
/// The document lives at `{base}/artifacts/{namespace}/users/{user}/profile`.
/// GET reads it (404 means no profile yet), PUT replaces the whole
/// document, PATCH replaces the symptoms log array in place. Writes are
/// not retried here; failures surface to the caller as a store status so
/// the UI can offer a manual retry.
pub struct RemoteStore {
    http: Client,
    document_url: String,
    watch_tx: watch::Sender<Option<UserProfile>>,
}

impl RemoteStore {
    pub fn new(http: Client, base_url: &str, namespace: &str, user_id: &str) -> Self {
        // Slashes in the namespace would split the path segment.
        let namespace = namespace.replace('/', "_");
        let document_url = format!(
            "{}/artifacts/{}/users/{}/profile",
            base_url.trim_end_matches('/'),
            namespace,
            user_id
        );
        let (watch_tx, _) = watch::channel(None);
        Self {
            http,
            document_url,
            watch_tx,
        }
    }

    pub fn document_url(&self) -> &str {
        &self.document_url
    }

    /// Start the subscription poller.
    ///
    /// Fetches the document on the given interval and pushes into the
    /// watch channel only when the profile actually changed. A write from
    /// this client becomes visible to subscribers on the next poll. The
    /// returned handle can be aborted to stop polling.
    pub fn spawn_poller(&self, interval: Duration) -> JoinHandle<()> {
        let http = self.http.clone();
        let url = self.document_url.clone();
        let tx = self.watch_tx.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                match fetch_document(&http, &url).await {
                    Ok(profile) => {
                        tx.send_if_modified(|current| {
                            if *current == profile {
                                false
                            } else {
                                *current = profile;
                                true
                            }
                        });
                    }
                    Err(err) => log::warn!("profile poll failed: {err}"),
                }
            }
        })
    }
}

async fn fetch_document(http: &Client, url: &str) -> Result<Option<UserProfile>> {
    let response = http.get(url).send().await.map_err(Error::StoreUnavailable)?;
    if response.status() == StatusCode::NOT_FOUND {
        return Ok(None);
    }
    if !response.status().is_success() {
        return Err(Error::StoreRejected(response.status()));
    }
    let profile = response.json().await.map_err(Error::StoreUnavailable)?;
    Ok(Some(profile))
}

#[async_trait]
impl ProfileStore for RemoteStore {
    async fn load(&self) -> Result<Option<UserProfile>> {
        fetch_document(&self.http, &self.document_url).await
    }

    async fn replace(&self, profile: &UserProfile) -> Result<()> {
        let response = self
            .http
            .put(&self.document_url)
            .json(profile)
            .send()
            .await
            .map_err(Error::StoreUnavailable)?;
        if !response.status().is_success() {
            return Err(Error::StoreRejected(response.status()));
        }
        log::debug!("profile document replaced");
        Ok(())
    }

    async fn replace_symptoms_log(&self, entries: &[LogEntry]) -> Result<()> {
        let response = self
            .http
            .patch(&self.document_url)
            .json(&json!({ "symptomsLog": entries }))
            .send()
            .await
            .map_err(Error::StoreUnavailable)?;
        if !response.status().is_success() {
            return Err(Error::StoreRejected(response.status()));
        }
        log::debug!("symptoms log replaced ({} entries)", entries.len());
        Ok(())
    }

    fn subscribe(&self) -> watch::Receiver<Option<UserProfile>> {
        self.watch_tx.subscribe()
    }
}
