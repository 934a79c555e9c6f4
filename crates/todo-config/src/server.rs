//! HTTP server configuration.

use serde::{Deserialize, Serialize};

fn default_addr() -> String {
    "127.0.0.1:8080".to_string()
}

const fn default_shutdown_grace_secs() -> u64 {
    5
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Socket address the API listens on.
    #[serde(default = "default_addr")]
    pub addr: String,

    /// Seconds in-flight requests get to finish after a shutdown signal.
    #[serde(default = "default_shutdown_grace_secs")]
    pub shutdown_grace_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_addr(),
            shutdown_grace_secs: default_shutdown_grace_secs(),
        }
    }
}
