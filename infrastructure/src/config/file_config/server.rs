//! HTTP server configuration from TOML (`[server]` section)

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// # Example
///
/// ```toml
/// [server]
/// bind = "0.0.0.0:8000"
/// cors_origins = ["http://localhost:3000", "https://study.example.com"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Listen address
    pub bind: String,
    /// Allowed CORS origins. Any `http://localhost:<port>` origin is always allowed.
    pub cors_origins: Vec<String>,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8000".to_string(),
            cors_origins: vec!["http://localhost:3000".to_string()],
        }
    }
}

impl FileServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        self.bind.trim().parse()
    }
}
