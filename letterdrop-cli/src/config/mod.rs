//! Configuration module for the letterdrop CLI.
//!
//! Handles loading configuration from a TOML file, then applying CLI and
//! environment overrides.

pub mod file;

use crate::config::file::FileConfig;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("invalid url for {field}: {source}")]
    InvalidUrl {
        field: &'static str,
        source: url::ParseError,
    },

    #[error("validation error: {0}")]
    ValidationError(String),
}

/// Validated runtime configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base: Url,
    pub timeout: Duration,
    pub qr_service: Url,
    pub copy_on_generate: bool,
}

/// Configuration loader that handles the complete loading process.
pub struct ConfigLoader {
    config_path: PathBuf,
    api_base_override: Option<Url>,
}

impl ConfigLoader {
    /// Create a new config loader.
    pub fn new(config_path: impl AsRef<Path>, api_base_override: Option<Url>) -> Self {
        Self {
            config_path: config_path.as_ref().to_path_buf(),
            api_base_override,
        }
    }

    /// Load and process the configuration.
    ///
    /// This will:
    /// 1. Read the TOML file, or fall back to defaults if it does not exist
    /// 2. Apply CLI overrides
    /// 3. Validate the configuration
    pub fn load(&self) -> Result<AppConfig, ConfigError> {
        let mut file_config = match std::fs::read_to_string(&self.config_path) {
            Ok(content) => toml::from_str::<FileConfig>(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(
                    "No config file at {:?}, using defaults",
                    self.config_path
                );
                FileConfig::default()
            }
            Err(e) => return Err(e.into()),
        };

        if let Some(base) = &self.api_base_override {
            file_config.api.base_url = base.to_string();
        }

        self.build(file_config)
    }

    fn build(&self, config: FileConfig) -> Result<AppConfig, ConfigError> {
        if config.api.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "api.timeout_secs must be greater than zero".to_owned(),
            ));
        }

        let api_base = parse_http_url("api.base_url", &config.api.base_url)?;
        let qr_service = parse_http_url("qr.service_url", &config.qr.service_url)?;

        Ok(AppConfig {
            api_base,
            timeout: Duration::from_secs(config.api.timeout_secs),
            qr_service,
            copy_on_generate: config.ui.copy_on_generate,
        })
    }
}

fn parse_http_url(field: &'static str, value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value).map_err(|source| ConfigError::InvalidUrl { field, source })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::ValidationError(format!(
            "{field} must use http or https, got {other}"
        ))),
    }
}
