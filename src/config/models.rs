use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

use crate::media_type::{MediaTypeError, Precision};

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub negotiation: NegotiationConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: SocketAddr,
    /// Upper bound on request bodies accepted by the HTTP API
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

fn default_max_body_bytes() -> usize {
    64 * 1024
}

/// Negotiation defaults
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NegotiationConfig {
    /// Significant digits kept for numeric parameter values
    #[serde(default = "default_precision")]
    pub precision: u32,
    /// Header used when a request carries neither an explicit header nor `Accept`
    #[serde(default = "default_accept")]
    pub default_accept: String,
    /// Representations offered when a request does not list its own
    #[serde(default)]
    pub available: Vec<String>,
}

impl NegotiationConfig {
    pub fn precision(&self) -> Result<Precision, MediaTypeError> {
        Precision::new(self.precision)
    }
}

impl Default for NegotiationConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            default_accept: default_accept(),
            available: Vec::new(),
        }
    }
}

fn default_precision() -> u32 {
    Precision::DEFAULT.digits()
}

fn default_accept() -> String {
    "*/*".to_string()
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TelemetryConfig {
    /// `tracing_subscriber::EnvFilter` directive, overridden by `RUST_LOG`
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.server.bind_addr.to_string(), "0.0.0.0:8080");
        assert_eq!(config.server.max_body_bytes, 64 * 1024);
        assert_eq!(config.negotiation.precision().unwrap(), Precision::DEFAULT);
        assert_eq!(config.negotiation.default_accept, "*/*");
        assert!(config.negotiation.available.is_empty());
        assert_eq!(config.telemetry.log_filter, "info");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
[negotiation]
available = ["application/json", "text/html"]
            "#,
        )
        .unwrap();

        assert_eq!(config.negotiation.available.len(), 2);
        assert_eq!(config.negotiation.precision, 3);
        assert_eq!(config.server.bind_addr.port(), 8080);
    }
}
