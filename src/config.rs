//! Configuration handling for the contact form

use crate::submit::DEFAULT_ENDPOINT;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use url::Url;

/// Environment variable overriding the submission endpoint
pub const ENDPOINT_ENV: &str = "CONTACT_FORM_ENDPOINT";

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid submission endpoint {value:?}: {source}")]
    InvalidEndpoint {
        value: String,
        source: url::ParseError,
    },
}

/// User configuration for the form
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ContactConfig {
    /// Endpoint the entries are posted to
    pub endpoint: Option<String>,
    /// Log filter directive, e.g. `contact_tui=debug`
    pub log_level: Option<String>,
}

impl ContactConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "contact-tui", "contact-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory the log file is written to
    pub fn log_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().to_path_buf())
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: ContactConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Endpoint to submit to: environment first, then the config file, then
    /// the built-in default
    pub fn endpoint(&self) -> Result<Url, ConfigError> {
        resolve_endpoint(std::env::var(ENDPOINT_ENV).ok(), self.endpoint.as_deref())
    }
}

fn resolve_endpoint(from_env: Option<String>, from_file: Option<&str>) -> Result<Url, ConfigError> {
    let value = from_env
        .filter(|v| !v.trim().is_empty())
        .or_else(|| from_file.map(str::to_string))
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    Url::parse(&value).map_err(|source| ConfigError::InvalidEndpoint { value, source })
}
