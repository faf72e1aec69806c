//! Configuration handling for the contact form

use crate::state::{Locale, NotificationCenter, SubmissionController};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Simulated network latency of a submission (1 second)
const DEFAULT_SUBMIT_LATENCY: Duration = Duration::from_millis(1000);

const DEFAULT_REDIRECT_TARGET: &str = "thank_you";

/// User configuration, every field optional
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    /// Language of labels and messages
    pub locale: Option<Locale>,
    /// How long a toast stays visible
    pub notification_duration_ms: Option<u64>,
    /// Delay between the success toast and navigation
    pub redirect_delay_ms: Option<u64>,
    /// Latency of the simulated transport
    pub submit_latency_ms: Option<u64>,
    /// Where to navigate after a successful submission
    pub redirect_target: Option<String>,
    /// Make the simulated transport report failures
    pub simulate_failure: Option<bool>,
}

impl FormConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "contact-form", "contact-form")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: FormConfig = serde_json::from_str(&content)?;
                tracing::info!("Loaded config from {}", path.display());
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    pub fn locale(&self) -> Locale {
        self.locale.unwrap_or_default()
    }

    pub fn notification_duration(&self) -> Duration {
        self.notification_duration_ms
            .map(Duration::from_millis)
            .unwrap_or(NotificationCenter::DEFAULT_DURATION)
    }

    pub fn redirect_delay(&self) -> Duration {
        self.redirect_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(SubmissionController::DEFAULT_REDIRECT_DELAY)
    }

    pub fn submit_latency(&self) -> Duration {
        self.submit_latency_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_SUBMIT_LATENCY)
    }

    pub fn redirect_target(&self) -> &str {
        self.redirect_target
            .as_deref()
            .unwrap_or(DEFAULT_REDIRECT_TARGET)
    }

    pub fn simulate_failure(&self) -> bool {
        self.simulate_failure.unwrap_or(false)
    }
}
