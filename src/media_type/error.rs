use thiserror::Error;

/// Errors raised while turning a raw string into a [`MediaType`](super::MediaType)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediaTypeError {
    #[error("malformed media type '{media_type}': parameter '{segment}' has no '=' separator")]
    MalformedParameter { media_type: String, segment: String },

    #[error("precision must be between 1 and {max} significant digits, got {digits}")]
    InvalidPrecision { digits: u32, max: u32 },
}
