use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Placeholder shipped in fresh configs; any username containing it counts as unset.
pub const USERNAME_SENTINEL: &str = "YOUR_GITHUB_USERNAME";

pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub github_username: String,
    pub projects_count: usize,
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub locale: String,
    #[serde(default)]
    pub contact_endpoint: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            github_username: USERNAME_SENTINEL.to_string(),
            projects_count: 6,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: 10,
            locale: "en_US".to_string(),
            contact_endpoint: None,
        }
    }
}

/// Values given on the command line; they win over every other source.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub github_username: Option<String>,
    pub projects_count: Option<usize>,
}

impl Config {
    pub fn load(overrides: Overrides) -> Self {
        let config_file = config_dir().join("folio").join("config.toml");
        Self::figment(Some(config_file), overrides.clone())
            .extract()
            .unwrap_or_else(|e| {
                log::warn!("config parse error, using defaults: {e}");
                Self::with_overrides(Figment::from(Serialized::defaults(Config::default())), overrides)
                    .extract()
                    .unwrap_or_default()
            })
    }

    fn figment(config_file: Option<PathBuf>, overrides: Overrides) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));

        if let Some(path) = config_file.filter(|p| p.exists()) {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed("FOLIO_"));
        Self::with_overrides(figment, overrides)
    }

    // Command-line values are applied last, even when the other layers are discarded.
    fn with_overrides(mut figment: Figment, overrides: Overrides) -> Figment {
        if let Some(user) = overrides.github_username {
            figment = figment.merge(Serialized::default("github_username", user));
        }
        if let Some(count) = overrides.projects_count {
            figment = figment.merge(Serialized::default("projects_count", count));
        }
        figment
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}

/// An identity is usable when it is non-blank and not the shipped placeholder.
pub fn is_configured(identity: &str) -> bool {
    let trimmed = identity.trim();
    !trimmed.is_empty() && !trimmed.contains(USERNAME_SENTINEL)
}

pub fn config_dir() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join(".config"))
        })
        .unwrap_or_else(|| PathBuf::from("."))
}
