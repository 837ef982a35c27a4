use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::services::gemini;

/// Application settings, stored as JSON in the user's config directory.
/// Environment variables override the file where set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub gemini_api_key: String,
    pub gemini_model: String,
    /// Base URL of the remote document store.
    pub store_url: String,
    /// Per-app namespace under which profile documents live.
    pub app_namespace: String,
    /// Anonymous per-install identity, generated on first load.
    pub user_id: String,
    /// Profile subscription poll interval.
    pub poll_interval_secs: u64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            gemini_api_key: String::new(),
            gemini_model: gemini::DEFAULT_MODEL.to_string(),
            store_url: "https://store.cyclecare.app/v1".to_string(),
            app_namespace: "cyclecare".to_string(),
            user_id: String::new(),
            poll_interval_secs: 30,
        }
    }
}

fn settings_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| Error::settings("no config directory available"))?
        .join("cyclecare");
    std::fs::create_dir_all(&config_dir)?;
    Ok(config_dir.join("settings.json"))
}

impl AppSettings {
    /// Load settings from disk, or defaults when no file exists.
    ///
    /// A missing user id is generated and persisted before the env
    /// overrides are applied, so overrides never end up in the file.
    pub fn load() -> Result<Self> {
        let path = settings_path()?;

        let mut settings = if path.exists() {
            let data = std::fs::read_to_string(&path)?;
            serde_json::from_str(&data)?
        } else {
            AppSettings::default()
        };

        if settings.user_id.is_empty() {
            settings.user_id = uuid::Uuid::new_v4().to_string();
            settings.save()?;
            log::info!("generated anonymous user id {}", settings.user_id);
        }

        // Env vars take priority over the file.
        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            if !key.is_empty() {
                settings.gemini_api_key = key;
            }
        }
        if let Ok(url) = std::env::var("CYCLECARE_STORE_URL") {
            if !url.is_empty() {
                settings.store_url = url;
            }
        }

        Ok(settings)
    }

    /// Save settings to disk.
    pub fn save(&self) -> Result<()> {
        let path = settings_path()?;
        let data = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, data)?;
        Ok(())
    }
}
