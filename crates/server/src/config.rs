//! Service configuration.
//!
//! One `AppConfig` is built at startup (defaults, then an optional YAML
//! file, then command-line/env overrides) and handed to every component.
//!
//! ```yaml
//! bind_addr: "0.0.0.0:8000"
//! gemini:
//!   api_key: "..."
//!   model: "gemini-1.5-flash-latest"
//! omdb:
//!   api_key: "..."
//! pacing:
//!   delay_ms: 500
//! ```

use llm_client::GeminiConfig;
use serde::{Deserialize, Serialize};
use sources::{OmdbConfig, Pacing};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Missing API key for {0}")]
    MissingApiKey(&'static str),
}

/// Pause between metadata lookups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PacingConfig {
    /// Milliseconds to wait between lookups; 0 disables pacing
    pub delay_ms: u64,
}

impl PacingConfig {
    pub fn pacing(&self) -> Pacing {
        Pacing::from_millis(self.delay_ms)
    }
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self { delay_ms: 500 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Address the HTTP API listens on
    pub bind_addr: String,
    pub gemini: GeminiConfig,
    pub omdb: OmdbConfig,
    pub pacing: PacingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8000".to_string(),
            gemini: GeminiConfig::default(),
            omdb: OmdbConfig::default(),
            pacing: PacingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load a YAML config file; omitted keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Check that both upstream services can be authenticated against.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gemini.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey("generation service (gemini)"));
        }
        if self.omdb.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey("metadata service (omdb)"));
        }
        Ok(())
    }
}
