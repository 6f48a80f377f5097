//! Backend configuration from TOML (`[backend]` section)

use crate::backend::gateway::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw backend configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBackendConfig {
    /// Base URL of the chat backend
    pub base_url: String,
    /// Request timeout in seconds (unset: wait indefinitely)
    pub timeout_seconds: Option<u64>,
}

impl FileBackendConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl Default for FileBackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: None,
        }
    }
}
