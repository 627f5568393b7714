//! Configuration for the metadata lookup service.

use serde::{Deserialize, Serialize};

/// Connection settings for the OMDb API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OmdbConfig {
    /// Base URL of the metadata service
    pub base_url: String,

    /// API key, sent as the `apikey` query parameter
    pub api_key: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for OmdbConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.omdbapi.com".to_string(),
            api_key: String::new(),
            timeout_secs: 30,
        }
    }
}
