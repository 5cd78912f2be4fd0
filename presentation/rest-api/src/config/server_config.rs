use std::env;

use super::error::ConfigError;

/// Service-account files are a few kilobytes; anything far larger is refused.
const DEFAULT_MAX_UPLOAD_BYTES: usize = 64 * 1024;

/// Server configuration for HTTP listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: String,
    pub max_upload_bytes: usize,
}

impl ServerConfig {
    /// Load server configuration from environment variables
    ///
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "127.0.0.1")
    /// - SERVICE_PORT: Port to bind (default: "8080")
    /// - MAX_UPLOAD_BYTES: Largest accepted config file upload (default: 65536)
    pub fn from_env() -> Result<Self, ConfigError> {
        let ip = env::var("SERVICE_IP").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("SERVICE_PORT").unwrap_or_else(|_| "8080".to_string());
        let max_upload_bytes = match env::var("MAX_UPLOAD_BYTES") {
            Ok(raw) => parse_size("MAX_UPLOAD_BYTES", &raw)?,
            Err(_) => DEFAULT_MAX_UPLOAD_BYTES,
        };

        Ok(Self {
            ip,
            port,
            max_upload_bytes,
        })
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

fn parse_size(name: &'static str, raw: &str) -> Result<usize, ConfigError> {
    raw.trim()
        .parse::<usize>()
        .map_err(|_| ConfigError::InvalidNumber {
            name,
            value: raw.to_string(),
        })
}
