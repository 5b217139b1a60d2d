//! Request and response bodies of the negotiation API.
//!
//! `POST /negotiate`:
//!
//! ```json
//! {
//!   "available": ["application/json", "text/html;charset=utf-8"],
//!   "accept": "text/*;q=0.3, application/json;q=0.9"
//! }
//! ```
//!
//! Both fields are optional: `available` falls back to the configured list,
//! `accept` to the request's own `Accept` header and then to the configured
//! default header.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::negotiation::Ranked;
use crate::observability::MetricsSnapshot;

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
pub struct NegotiateRequest {
    #[serde(default)]
    pub available: Vec<String>,
    #[serde(default)]
    pub accept: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct NegotiateResponse {
    pub media_type: String,
    pub index: usize,
    pub fitness: i32,
    #[serde(with = "rust_decimal::serde::float")]
    pub quality: Decimal,
}

impl From<Ranked> for NegotiateResponse {
    fn from(ranked: Ranked) -> Self {
        Self {
            media_type: ranked.media_type,
            index: ranked.index,
            fitness: ranked.score.fitness,
            quality: ranked.score.quality,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ParseRequest {
    pub media_type: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub metrics: MetricsSnapshot,
}
