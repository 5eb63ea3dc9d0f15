//! Metrics registry for doubtdesk
//!
//! - Counters only
//! - Monotonic increase
//! - Reset only on process start
//! - Thread-safe but lock-free

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use crate::selector::Selection;

/// Metrics registry containing all request counters
///
/// # Thread Safety
///
/// All counters use atomic operations with Relaxed ordering; readers may see
/// slightly stale values, which is fine for metrics.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Form page renders (GET and POST)
    page_views: AtomicU64,
    /// JSON API requests
    api_requests: AtomicU64,
    /// Explanations rendered through any surface
    explanations: AtomicU64,
    /// Explanations produced by a specific rule
    rule_hits: AtomicU64,
    /// Explanations produced by a subject fallback
    subject_fallbacks: AtomicU64,
    /// Explanations produced by the generic template
    generic_fallbacks: AtomicU64,
    /// Catalog lookups for unknown branches or subjects
    catalog_misses: AtomicU64,
}

impl MetricsRegistry {
    /// Create a new metrics registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment page views
    pub fn increment_page_views(&self) {
        self.page_views.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment API requests
    pub fn increment_api_requests(&self) {
        self.api_requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment catalog misses
    pub fn increment_catalog_misses(&self) {
        self.catalog_misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Record one rendered explanation and how it was selected
    pub fn record_selection(&self, selection: Selection) {
        self.explanations.fetch_add(1, Ordering::Relaxed);
        let counter = match selection {
            Selection::Rule { .. } => &self.rule_hits,
            Selection::SubjectFallback => &self.subject_fallbacks,
            Selection::Generic => &self.generic_fallbacks,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Get all metrics as a snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            page_views: self.page_views.load(Ordering::Relaxed),
            api_requests: self.api_requests.load(Ordering::Relaxed),
            explanations: self.explanations.load(Ordering::Relaxed),
            rule_hits: self.rule_hits.load(Ordering::Relaxed),
            subject_fallbacks: self.subject_fallbacks.load(Ordering::Relaxed),
            generic_fallbacks: self.generic_fallbacks.load(Ordering::Relaxed),
            catalog_misses: self.catalog_misses.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time snapshot of all metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub page_views: u64,
    pub api_requests: u64,
    pub explanations: u64,
    pub rule_hits: u64,
    pub subject_fallbacks: u64,
    pub generic_fallbacks: u64,
    pub catalog_misses: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_registry_has_zero_values() {
        let snapshot = MetricsRegistry::new().snapshot();

        assert_eq!(snapshot.page_views, 0);
        assert_eq!(snapshot.explanations, 0);
        assert_eq!(snapshot.rule_hits, 0);
        assert_eq!(snapshot.catalog_misses, 0);
    }

    #[test]
    fn test_record_selection_splits_by_kind() {
        let registry = MetricsRegistry::new();

        registry.record_selection(Selection::Rule { index: 0 });
        registry.record_selection(Selection::Rule { index: 4 });
        registry.record_selection(Selection::SubjectFallback);
        registry.record_selection(Selection::Generic);

        let snapshot = registry.snapshot();
        assert_eq!(snapshot.explanations, 4);
        assert_eq!(snapshot.rule_hits, 2);
        assert_eq!(snapshot.subject_fallbacks, 1);
        assert_eq!(snapshot.generic_fallbacks, 1);
    }

    #[test]
    fn test_snapshot_serializes() {
        let registry = MetricsRegistry::new();
        registry.increment_page_views();
        registry.increment_api_requests();

        let json = serde_json::to_value(registry.snapshot()).unwrap();
        assert_eq!(json["page_views"], 1);
        assert_eq!(json["api_requests"], 1);
        assert_eq!(json["rule_hits"], 0);
    }

    #[test]
    fn test_thread_safety() {
        use std::sync::Arc;
        use std::thread;

        let registry = Arc::new(MetricsRegistry::new());
        let mut handles = vec![];

        for _ in 0..10 {
            let reg = Arc::clone(&registry);
            handles.push(thread::spawn(move || {
                for _ in 0..100 {
                    reg.increment_page_views();
                    reg.record_selection(Selection::SubjectFallback);
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        let snapshot = registry.snapshot();
        assert_eq!(snapshot.page_views, 1000);
        assert_eq!(snapshot.explanations, 1000);
        assert_eq!(snapshot.subject_fallbacks, 1000);
    }
}
