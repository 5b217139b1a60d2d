use std::sync::Arc;

use crate::config::Config;
use crate::negotiation::Negotiator;
use crate::observability::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub negotiator: Negotiator,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            negotiator: config.negotiator(),
            config: Arc::new(config),
            metrics: Arc::new(Metrics::new()),
        }
    }
}
