//! Client configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Result;

/// Server URL used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Environment variable overriding the server URL
pub const SERVER_URL_ENV: &str = "FHE_SERVER_URL";

/// Where the FHE server lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ClientConfig {
    /// Config for `base_url`, with any trailing `/` trimmed
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Read `FHE_SERVER_URL`, falling back to [`DEFAULT_BASE_URL`]
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(SERVER_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    /// Load from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: ClientConfig = serde_json::from_str(&contents)?;
        Ok(Self::new(config.base_url))
    }

    /// Full URL for a route such as `/transfer`
    pub fn url(&self, route: &str) -> String {
        format!("{}{}", self.base_url, route)
    }
}
