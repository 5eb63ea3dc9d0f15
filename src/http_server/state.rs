//! Shared handler state

use chrono::{DateTime, Utc};

use super::config::HttpServerConfig;
use crate::observability::MetricsRegistry;

/// State shared by every route
///
/// Catalog data is `'static` and not held here.
#[derive(Debug)]
pub struct AppState {
    pub config: HttpServerConfig,
    pub metrics: MetricsRegistry,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Create state with fresh counters
    pub fn new(config: HttpServerConfig) -> Self {
        Self {
            config,
            metrics: MetricsRegistry::new(),
            started_at: Utc::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(HttpServerConfig::default())
    }
}
