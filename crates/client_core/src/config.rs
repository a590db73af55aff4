use std::{collections::HashMap, fs, path::Path, time::Duration};

use shared::domain::{Industry, Language};
use thiserror::Error;
use tracing::warn;
use url::Url;

pub const SETTINGS_FILE: &str = "finhealth.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid analysis_url {value:?}: {reason}")]
    InvalidAnalysisUrl { value: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub analysis_url: String,
    /// `0` disables the timeout.
    pub request_timeout_secs: u64,
    pub default_industry: Industry,
    pub default_language: Language,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            analysis_url: "http://localhost:5000/analyze".into(),
            request_timeout_secs: 120,
            default_industry: Industry::Services,
            default_language: Language::En,
        }
    }
}

impl ClientSettings {
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }

    /// Replaces the endpoint after checking it is an absolute http(s) URL.
    pub fn set_analysis_url(&mut self, value: &str) -> Result<(), SettingsError> {
        let invalid = |reason: String| SettingsError::InvalidAnalysisUrl {
            value: value.to_string(),
            reason,
        };
        let url = Url::parse(value.trim()).map_err(|err| invalid(err.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme `{}`", url.scheme())));
        }
        self.analysis_url = url.to_string();
        Ok(())
    }

    fn apply(&mut self, key: &str, value: &str) {
        match key {
            "analysis_url" => {
                if let Err(err) = self.set_analysis_url(value) {
                    warn!("ignoring setting: {err}");
                }
            }
            "request_timeout_secs" => match value.trim().parse::<u64>() {
                Ok(secs) => self.request_timeout_secs = secs,
                Err(_) => warn!(%value, "ignoring invalid request_timeout_secs"),
            },
            "industry" | "default_industry" => match value.parse::<Industry>() {
                Ok(industry) => self.default_industry = industry,
                Err(err) => warn!("ignoring setting: {err}"),
            },
            "lang" | "default_language" => match value.parse::<Language>() {
                Ok(language) => self.default_language = language,
                Err(err) => warn!("ignoring setting: {err}"),
            },
            _ => {}
        }
    }
}

/// Defaults, then `finhealth.toml` in the working directory, then env vars.
pub fn load_settings() -> ClientSettings {
    load_settings_from(Path::new(SETTINGS_FILE), |name| std::env::var(name).ok())
}

pub fn load_settings_from(
    file: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> ClientSettings {
    let mut settings = ClientSettings::default();

    if let Ok(raw) = fs::read_to_string(file) {
        match toml::from_str::<HashMap<String, toml::Value>>(&raw) {
            Ok(file_cfg) => {
                for (key, value) in file_cfg {
                    let value = match value {
                        toml::Value::String(s) => s,
                        other => other.to_string(),
                    };
                    settings.apply(&key, &value);
                }
            }
            Err(err) => warn!(path = %file.display(), "ignoring unreadable settings file: {err}"),
        }
    }

    for (key, names) in [
        (
            "analysis_url",
            ["FINHEALTH_ANALYSIS_URL", "APP__ANALYSIS_URL"],
        ),
        (
            "request_timeout_secs",
            [
                "FINHEALTH_REQUEST_TIMEOUT_SECS",
                "APP__REQUEST_TIMEOUT_SECS",
            ],
        ),
        ("industry", ["FINHEALTH_INDUSTRY", "APP__INDUSTRY"]),
        ("lang", ["FINHEALTH_LANG", "APP__LANG"]),
    ] {
        for name in names {
            if let Some(v) = env(name) {
                settings.apply(key, &v);
            }
        }
    }

    settings
}
