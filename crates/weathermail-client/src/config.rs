//! Client configuration
//!
//! Defaults, then an optional `weathermail.toml` in the working directory,
//! then `WEATHERMAIL_*` environment variables.

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Origin of the backend, without a trailing slash
    pub api_base_url: String,
    /// Where the access token is persisted. `None` keeps it in memory only.
    pub token_path: Option<PathBuf>,
    /// Per-request timeout. `None` leaves the transport default in place.
    pub request_timeout: Option<Duration>,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    api_base_url: String,
    token_path: Option<PathBuf>,
    request_timeout_secs: Option<u64>,
}

impl ClientConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: normalize_base_url(&api_base_url.into()),
            token_path: None,
            request_timeout: None,
        }
    }

    pub fn load() -> anyhow::Result<Self> {
        let settings = config::Config::builder()
            .set_default("api_base_url", DEFAULT_API_BASE_URL)?
            .add_source(config::File::with_name("weathermail").required(false))
            .add_source(config::Environment::with_prefix("WEATHERMAIL"))
            .build()?;

        Self::from_settings(settings)
    }

    pub fn from_settings(settings: config::Config) -> anyhow::Result<Self> {
        let raw: RawConfig = settings.try_deserialize()?;

        let api_base_url = normalize_base_url(&raw.api_base_url);
        if api_base_url.is_empty() {
            anyhow::bail!("api_base_url must not be empty");
        }

        let token_path = raw.token_path.or_else(default_token_path);
        if token_path.is_none() {
            tracing::warn!("Could not determine config directory, access token will not persist");
        }

        Ok(Self {
            api_base_url,
            token_path,
            request_timeout: raw
                .request_timeout_secs
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
        })
    }

}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

fn default_token_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("weathermail").join("session.json"))
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
