//! Observability: logging setup and negotiation counters

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing_subscriber::EnvFilter;

/// Installs the global `fmt` subscriber.
///
/// `RUST_LOG` wins over `default_filter` when set. Logs go to stderr so
/// command output on stdout stays machine-readable.
pub fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Metrics handle for recording counters
#[derive(Debug, Default)]
pub struct Metrics {
    negotiations: AtomicU64,
    not_acceptable: AtomicU64,
    malformed: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn negotiated(&self) {
        self.negotiations.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "negotiations", "Metric incremented");
    }

    pub fn not_acceptable(&self) {
        self.not_acceptable.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "not_acceptable", "Metric incremented");
    }

    pub fn malformed(&self) {
        self.malformed.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "malformed", "Metric incremented");
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            negotiations: self.negotiations.load(Ordering::Relaxed),
            not_acceptable: self.not_acceptable.load(Ordering::Relaxed),
            malformed: self.malformed.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub negotiations: u64,
    pub not_acceptable: u64,
    pub malformed: u64,
}
