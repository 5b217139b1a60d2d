use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
};

use super::{
    error::ApiError,
    models::{HealthResponse, NegotiateRequest, NegotiateResponse, ParseRequest},
    state::AppState,
    utils::{header_str, read_body, require_json},
};
use crate::media_type::MediaType;

/// Content negotiation endpoint (POST /negotiate)
///
/// ## Flow:
/// 1. Require a JSON body within `server.max_body_bytes`
/// 2. Resolve the available list: request body, else `negotiation.available`
/// 3. Resolve the header: body `accept`, else the request's `Accept`,
///    else `negotiation.default_accept` (blank values count as absent)
/// 4. Return the winner with its score, or 406 when nothing is acceptable
///
/// Malformed media types in either list are a 400, never a partial result.
pub async fn negotiate(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: axum::body::Body,
) -> Result<impl IntoResponse, ApiError> {
    require_json(&headers)?;
    let body_bytes = read_body(body, state.config.server.max_body_bytes).await?;
    let request: NegotiateRequest = serde_json::from_slice(&body_bytes)?;

    let available = if request.available.is_empty() {
        &state.config.negotiation.available
    } else {
        &request.available
    };
    if available.is_empty() {
        return Err(ApiError::InvalidPayload(
            "no available media types in request or configuration".into(),
        ));
    }

    let accept = request
        .accept
        .as_deref()
        .filter(|accept| !accept.trim().is_empty())
        .or_else(|| header_str(&headers, &header::ACCEPT))
        .unwrap_or(state.config.negotiation.default_accept.as_str());

    let winner = state
        .negotiator
        .negotiate(available.as_slice(), accept)
        .inspect_err(|_| state.metrics.malformed())?;

    match winner {
        Some(ranked) => {
            state.metrics.negotiated();
            Ok((StatusCode::OK, Json(NegotiateResponse::from(ranked))))
        }
        None => {
            state.metrics.not_acceptable();
            Err(ApiError::NotAcceptable(accept.to_string()))
        }
    }
}

/// Media type parsing endpoint (POST /parse)
///
/// Returns the structured form of one media type or media range.
pub async fn parse_media_type(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: axum::body::Body,
) -> Result<impl IntoResponse, ApiError> {
    require_json(&headers)?;
    let body_bytes = read_body(body, state.config.server.max_body_bytes).await?;
    let request: ParseRequest = serde_json::from_slice(&body_bytes)?;

    let parsed = MediaType::parse_with(&request.media_type, state.negotiator.precision())
        .inspect_err(|_| state.metrics.malformed())?;

    Ok((StatusCode::OK, Json(parsed)))
}

/// Health check endpoint (GET /health)
///
/// The service has no dependencies, so answering at all means healthy.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        metrics: state.metrics.snapshot(),
    };

    (StatusCode::OK, Json(response))
}
