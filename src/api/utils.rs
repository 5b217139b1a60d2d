//! Request helpers shared by the API handlers

use axum::http::{HeaderMap, HeaderName, header};
use http_body_util::{BodyExt, LengthLimitError, Limited};

use crate::api::error::ApiError;

/// Requires a JSON request body.
///
/// `application/json` with any parameters (e.g. `charset=utf-8`) passes;
/// look-alikes such as `application/jsonp`, `application/merge-patch+json`
/// or `text/json` are rejected.
pub fn require_json(headers: &HeaderMap) -> Result<mime::Mime, ApiError> {
    let content_type = header_str(headers, &header::CONTENT_TYPE)
        .ok_or_else(|| ApiError::InvalidPayload("missing Content-Type header".into()))?;

    let media_type: mime::Mime = content_type.parse().map_err(|_| {
        ApiError::InvalidPayload(format!("invalid Content-Type: {content_type}"))
    })?;

    if media_type.type_() != mime::APPLICATION
        || media_type.subtype() != mime::JSON
        || media_type.suffix().is_some()
    {
        return Err(ApiError::InvalidPayload(format!(
            "Content-Type must be application/json, got: {}",
            media_type.essence_str()
        )));
    }

    Ok(media_type)
}

/// Header value as text; absent, empty and non-visible-ASCII values read as `None`
pub fn header_str<'a>(headers: &'a HeaderMap, name: &HeaderName) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.trim().is_empty())
}

/// Collects the body, giving up as soon as more than `max_size` bytes arrive.
///
/// The limit applies after request decompression, so it bounds memory for
/// gzip uploads too.
pub async fn read_body(body: axum::body::Body, max_size: usize) -> Result<Vec<u8>, ApiError> {
    let collected = Limited::new(body, max_size)
        .collect()
        .await
        .map_err(|err| {
            if err.is::<LengthLimitError>() {
                ApiError::PayloadTooLarge(max_size)
            } else {
                ApiError::Internal(err.to_string())
            }
        })?;

    Ok(collected.to_bytes().to_vec())
}
