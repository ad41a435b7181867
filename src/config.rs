use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
const BASE_URL_ENV: &str = "PR_AGENT_BASE_URL";

/// Endpoint configuration for the remote PR Agent service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for AgentSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

pub fn settings_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pr-agent-desktop")
        .join("settings.json")
}

/// Load settings at startup: the config file first, then the environment
/// override. A missing or unreadable file falls back to defaults.
pub fn load_settings() -> AgentSettings {
    let mut settings = match read_settings_file() {
        Ok(settings) => settings,
        Err(e) => {
            log::debug!("Using default settings: {:#}", e);
            AgentSettings::default()
        }
    };

    if let Ok(url) = std::env::var(BASE_URL_ENV) {
        if !url.is_empty() {
            settings.base_url = url;
        }
    }

    settings
}

fn read_settings_file() -> anyhow::Result<AgentSettings> {
    let path = settings_path();
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("parse {}", path.display()))
}

pub async fn save_settings(settings: &AgentSettings) -> AppResult<()> {
    let path = settings_path();
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    tokio::fs::write(&path, json).await?;
    log::debug!("Saved settings to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_yields_default_base_url() {
        let settings: AgentSettings = serde_json::from_str("{}").expect("should parse");
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_settings_round_trip() {
        let settings = AgentSettings {
            base_url: "http://10.0.0.5:9000".into(),
        };
        let json = serde_json::to_string_pretty(&settings).expect("should serialize");
        let parsed: AgentSettings = serde_json::from_str(&json).expect("should parse");
        assert_eq!(parsed.base_url, "http://10.0.0.5:9000");
    }
}
