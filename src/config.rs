use std::path::PathBuf;
use std::time::Duration;

use eyre::Result;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::youtube::DEFAULT_USER_AGENT;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub default_languages: Option<Vec<String>>,
    pub request_timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
}

impl Config {
    /// Load config from ~/.config/ytxd/config.toml if it exists
    pub fn load() -> Result<Self> {
        let path = config_path();
        if path.exists() {
            debug!("Loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            debug!("No config file found at {}", path.display());
            Ok(Config::default())
        }
    }

    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Languages used when a request does not name any
    pub fn default_languages(&self) -> Vec<String> {
        match &self.default_languages {
            Some(langs) if !langs.is_empty() => langs.clone(),
            _ => vec!["en".to_string()],
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from(".config"))
        .join("ytxd")
        .join("config.toml")
}
