use super::models::Config;
use crate::media_type::{MediaType, Precision};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("negotiation.precision must be between 1 and {max}, got {value}")]
    InvalidPrecision { value: u32, max: u32 },

    #[error("negotiation.default_accept '{value}' is not a valid header: {reason}")]
    InvalidDefaultAccept { value: String, reason: String },

    #[error("negotiation.available entry '{value}' is not a valid media type: {reason}")]
    InvalidAvailableMediaType { value: String, reason: String },

    #[error("server.max_body_bytes must be positive")]
    InvalidMaxBodyBytes,
}

/// Validate the entire configuration
pub fn validate(config: &Config) -> Result<(), ValidationError> {
    let precision = validate_precision(config)?;
    validate_default_accept(config, precision)?;
    validate_available(config, precision)?;
    validate_server(config)?;
    Ok(())
}

fn validate_precision(config: &Config) -> Result<Precision, ValidationError> {
    config
        .negotiation
        .precision()
        .map_err(|_| ValidationError::InvalidPrecision {
            value: config.negotiation.precision,
            max: Precision::MAX_DIGITS,
        })
}

/// Every range of the fallback header must parse
fn validate_default_accept(config: &Config, precision: Precision) -> Result<(), ValidationError> {
    let header = &config.negotiation.default_accept;
    for range in header.split(',') {
        MediaType::parse_with(range, precision).map_err(|err| {
            ValidationError::InvalidDefaultAccept {
                value: header.clone(),
                reason: err.to_string(),
            }
        })?;
    }
    Ok(())
}

fn validate_available(config: &Config, precision: Precision) -> Result<(), ValidationError> {
    for entry in &config.negotiation.available {
        MediaType::parse_with(entry, precision).map_err(|err| {
            ValidationError::InvalidAvailableMediaType {
                value: entry.clone(),
                reason: err.to_string(),
            }
        })?;
    }
    Ok(())
}

fn validate_server(config: &Config) -> Result<(), ValidationError> {
    if config.server.max_body_bytes == 0 {
        return Err(ValidationError::InvalidMaxBodyBytes);
    }
    Ok(())
}
