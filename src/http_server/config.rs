//! HTTP Server Configuration
//!
//! Configuration for the artifact server: bind address, port, and the
//! storage directory. The directory travels inside this value and is handed
//! to the store and the static-file fallback at construction; nothing reads
//! it from process-global state.

use std::path::PathBuf;

use serde::Deserialize;

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    /// Address to bind to (default: "0.0.0.0")
    #[serde(default = "default_address")]
    pub address: String,

    /// Port to bind to (default: 8080)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory where artifacts are stored (default: "./artifacts")
    #[serde(default = "default_storage_dir")]
    pub storage_dir: PathBuf,
}

fn default_address() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_storage_dir() -> PathBuf {
    PathBuf::from("./artifacts")
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            port: default_port(),
            storage_dir: default_storage_dir(),
        }
    }
}

impl HttpServerConfig {
    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }
}
