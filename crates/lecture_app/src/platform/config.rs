use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use client_logging::{client_info, LogDestination};
use lecture_engine::ServiceSettings;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILENAME: &str = "lecture_client.ron";
pub const LOG_FILENAME: &str = "lecture_client.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum LogTarget {
    File,
    #[default]
    Terminal,
    Both,
}

impl From<LogTarget> for LogDestination {
    fn from(target: LogTarget) -> Self {
        match target {
            LogTarget::File => LogDestination::File,
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::Both => LogDestination::Both,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub server_url: String,
    pub connect_timeout_secs: u64,
    pub submit_timeout_secs: u64,
    pub ask_timeout_secs: u64,
    pub log: LogTarget,
    pub log_file: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let settings = ServiceSettings::default();
        Self {
            server_url: settings.base_url,
            connect_timeout_secs: settings.connect_timeout.as_secs(),
            submit_timeout_secs: settings.submit_timeout.as_secs(),
            ask_timeout_secs: settings.ask_timeout.as_secs(),
            log: LogTarget::default(),
            log_file: PathBuf::from(LOG_FILENAME),
        }
    }
}

impl ClientConfig {
    pub fn service_settings(&self) -> ServiceSettings {
        ServiceSettings {
            base_url: self.server_url.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            submit_timeout: Duration::from_secs(self.submit_timeout_secs),
            ask_timeout: Duration::from_secs(self.ask_timeout_secs),
        }
    }
}

/// Loads the config file.
///
/// An explicit `path` must exist. Without one, `./lecture_client.ron` is
/// used if present, else defaults.
pub fn load(path: Option<&Path>) -> Result<ClientConfig> {
    let (path, required) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILENAME), false),
    };

    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound && !required => {
            return Ok(ClientConfig::default());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read config {:?}", path));
        }
    };

    let config: ClientConfig =
        ron::from_str(&content).with_context(|| format!("failed to parse config {:?}", path))?;
    client_info!("Loaded config from {:?}", path);
    Ok(config)
}
