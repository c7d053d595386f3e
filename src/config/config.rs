use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

use crate::constants::{CONFIG_FILE, DEFAULT_TEAM, ENV_API_URL, ENV_TEAM, ENV_TOKEN};
use crate::error::{ErrorContext, VolumesError, VolumesResult};

/// Persisted target settings, stored as JSON in the home directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
}

/// The fully resolved server, credentials and team a command talks to.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    pub api_url: Option<String>,
    pub token: Option<String>,
    pub team: String,
}

impl Target {
    pub fn new(api_url: impl Into<String>, token: Option<String>, team: impl Into<String>) -> Self {
        Self {
            api_url: Some(api_url.into()),
            token,
            team: team.into(),
        }
    }

    /// Overlay environment variables on top of the saved config.
    pub fn resolve(config: Config) -> Self {
        let api_url = env::var(ENV_API_URL).ok().or(config.api_url);
        let token = env::var(ENV_TOKEN).ok().or(config.token);
        let team = env::var(ENV_TEAM)
            .ok()
            .or(config.team)
            .filter(|team| !team.is_empty())
            .unwrap_or_else(|| DEFAULT_TEAM.to_string());

        Self { api_url, token, team }
    }

    pub fn validate(&self) -> VolumesResult<&str> {
        match self.api_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => Ok(url),
            _ => Err(VolumesError::ConfigError(format!(
                "no API URL configured. Set {} or run 'volumes auth --url <URL>'",
                ENV_API_URL
            ))),
        }
    }
}

pub fn config_path() -> VolumesResult<PathBuf> {
    let home_dir = dirs::home_dir().context("Could not find home directory")?;
    Ok(home_dir.join(CONFIG_FILE))
}

pub fn load_config() -> VolumesResult<Config> {
    load_config_from(&config_path()?)
}

pub fn load_config_from(path: &Path) -> VolumesResult<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let config_str = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    serde_json::from_str(&config_str).map_err(|e| {
        VolumesError::ConfigError(format!("invalid config file {}: {}", path.display(), e))
    })
}

pub fn save_config(config: &Config) -> VolumesResult<()> {
    save_config_to(config, &config_path()?)
}

pub fn save_config_to(config: &Config, path: &Path) -> VolumesResult<()> {
    let config_str = serde_json::to_string_pretty(config)?;
    fs::write(path, config_str)
        .with_context(|| format!("Failed to write config file {}", path.display()))?;

    Ok(())
}

pub fn get_target() -> VolumesResult<Target> {
    Ok(Target::resolve(load_config()?))
}
