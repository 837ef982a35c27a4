use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::commands;
use crate::error::{Error, Result};
use crate::profile::{LogEntry, UserProfile};
use crate::services::cycle::CycleProjection;
use crate::services::dates;
use crate::services::gemini::InsightClient;
use crate::services::pregnancy::PregnancyProjection;
use crate::settings::AppSettings;
use crate::store::{ProfileStore, RemoteStore};

/// Application wiring: one shared HTTP client, a store handle bound to
/// this install's namespace and user, and the advisory client. All
/// constructed here and passed down explicitly; no globals.
pub struct App {
    settings: AppSettings,
    store: Arc<RemoteStore>,
    insight: InsightClient,
}

const HTTP_TIMEOUT_SECS: u64 = 30;

impl App {
    pub fn new(settings: AppSettings) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()
            .map_err(Error::Http)?;

        let store = Arc::new(RemoteStore::new(
            http.clone(),
            &settings.store_url,
            &settings.app_namespace,
            &settings.user_id,
        ));
        let insight = InsightClient::new(http, settings.gemini_api_key.clone())
            .with_model(settings.gemini_model.clone());

        log::info!(
            "CycleCare started, profile document at {}",
            store.document_url()
        );
        Ok(Self {
            settings,
            store,
            insight,
        })
    }

    /// Construct from the settings file on disk.
    pub fn from_disk() -> Result<Self> {
        Self::new(AppSettings::load()?)
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn store(&self) -> &RemoteStore {
        &self.store
    }

    pub fn insight(&self) -> &InsightClient {
        &self.insight
    }

    /// Current profile document, None before onboarding.
    pub async fn profile(&self) -> Result<Option<UserProfile>> {
        self.store.load().await
    }

    async fn require_profile(&self) -> Result<UserProfile> {
        self.profile().await?.ok_or(Error::ProfileMissing)
    }

    /// Receiver that observes profile changes once the watch is started.
    pub fn subscribe_profile(&self) -> watch::Receiver<Option<UserProfile>> {
        self.store.subscribe()
    }

    /// Start the profile subscription poller.
    pub fn start_profile_watch(&self) -> JoinHandle<()> {
        self.store
            .spawn_poller(Duration::from_secs(self.settings.poll_interval_secs))
    }

    pub async fn complete_onboarding(
        &self,
        form: commands::onboarding::OnboardingForm,
    ) -> Result<UserProfile> {
        commands::onboarding::complete(self.store.as_ref(), form).await
    }

    pub async fn cycle_overview(&self) -> Result<CycleProjection> {
        let profile = self.require_profile().await?;
        commands::overview::cycle_overview(&profile, dates::today())
    }

    pub async fn pregnancy_overview(&self) -> Result<PregnancyProjection> {
        let profile = self.require_profile().await?;
        commands::overview::pregnancy_overview(&profile, dates::today())
    }

    /// The entry the daily logger should open with today.
    pub async fn today_entry(&self) -> Result<LogEntry> {
        let profile = self.require_profile().await?;
        Ok(commands::daily_log::today_entry(&profile, dates::today()))
    }

    pub async fn save_daily_log(&self, entry: LogEntry) -> Result<Vec<LogEntry>> {
        let profile = self.require_profile().await?;
        commands::daily_log::save_daily_log(self.store.as_ref(), &profile, entry).await
    }

    pub async fn analyze_symptoms(&self, symptoms: &str) -> Result<String> {
        commands::insight::analyze_symptoms(&self.insight, symptoms).await
    }

    pub async fn ask_pregnancy_question(&self, question: &str) -> Result<String> {
        commands::insight::ask_pregnancy_question(&self.insight, question).await
    }

    /// Plain-text summary for manual sharing.
    pub async fn health_summary(&self) -> Result<String> {
        let profile = self.require_profile().await?;
        let projection = commands::overview::cycle_overview(&profile, dates::today())?;
        Ok(commands::share::health_summary(&profile, &projection))
    }
}
