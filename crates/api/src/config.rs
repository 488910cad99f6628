//! Server configuration

use serde::{Deserialize, Serialize};

/// HTTP listener configuration
///
/// The bind address is a fixed part of the webhook contract; the
/// defaults below are the values the upstream alert source is pointed
/// at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind host
    pub host: String,
    /// Bind port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 9094,
        }
    }
}

impl ServerConfig {
    /// Bind address in `host:port` form
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
