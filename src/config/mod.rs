//! Configuration management for mimeparser
//!
//! Settings are layered, later sources winning:
//! 1. Default values (embedded in structs)
//! 2. TOML configuration file
//! 3. Environment variables
//!
//! # Usage
//!
//! ```no_run
//! use mimeparser::config::Config;
//!
//! let config = Config::load().expect("Failed to load configuration");
//! println!("Server listening on: {}", config.server.bind_addr);
//! ```
//!
//! # Environment Variables
//!
//! Pattern: `MIMEPARSER__<section>__<key>`
//!
//! - `MIMEPARSER__SERVER__BIND_ADDR=0.0.0.0:9000`
//! - `MIMEPARSER__NEGOTIATION__PRECISION=4`
//! - `MIMEPARSER__TELEMETRY__LOG_FILTER=mimeparser=debug`
//!
//! # Configuration File
//!
//! Read from `config/mimeparser.toml` unless `MIMEPARSER_CONFIG` names another path.

mod models;
mod sources;
mod validation;

pub use models::{Config, NegotiationConfig, ServerConfig, TelemetryConfig};
pub use validation::ValidationError;

use crate::negotiation::Negotiator;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] ValidationError),
}

impl Config {
    /// Load configuration from all sources (file + environment)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file is malformed
    /// - Validation fails (precision out of range, unparsable media types)
    pub fn load() -> Result<Self, ConfigError> {
        let config = sources::load()?;
        validation::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: std::path::PathBuf) -> Result<Self, ConfigError> {
        let config = sources::load_from_sources(path)?;
        validation::validate(&config)?;
        Ok(config)
    }

    /// A negotiator using the configured precision
    ///
    /// Falls back to the default precision if the value was never validated.
    pub fn negotiator(&self) -> Negotiator {
        Negotiator::new(self.negotiation.precision().unwrap_or_default())
    }
}
