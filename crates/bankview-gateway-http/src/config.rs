//! Endpoint configuration for the HTTP gateway.

use serde::{Deserialize, Serialize};

/// Where the banking API lives and how long to wait for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "ApiConfig::default_base_url")]
    pub base_url: String,
    #[serde(default = "ApiConfig::default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
            timeout_seconds: Self::default_timeout_seconds(),
        }
    }
}

impl ApiConfig {
    pub fn default_base_url() -> String {
        "http://localhost:8080".into()
    }

    pub fn default_timeout_seconds() -> u64 {
        30
    }
}
