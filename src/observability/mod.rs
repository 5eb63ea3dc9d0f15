//! Observability subsystem for doubtdesk
//!
//! This module provides:
//! - Structured logging (`tracing`, JSON or pretty)
//! - Typed lifecycle events
//! - Atomic request and selection counters
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on explanation output
//! 3. Observability failure never stops the server
//!
//! # Usage
//!
//! ```ignore
//! use doubtdesk::observability::{self, Event, LogFormat, MetricsRegistry};
//!
//! observability::init_logging(LogFormat::Json)?;
//! observability::log_event(Event::BootStart);
//!
//! let metrics = MetricsRegistry::new();
//! metrics.increment_page_views();
//! ```

mod events;
mod logger;
mod metrics;

pub use events::Event;
pub use logger::{init as init_logging, LogFormat};
pub use metrics::{MetricsRegistry, MetricsSnapshot};

use std::fmt;

/// Observability error code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObservabilityErrorCode {
    /// Observability operation failed
    ObservabilityFailed,
}

impl ObservabilityErrorCode {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ObservabilityErrorCode::ObservabilityFailed => "DOUBTDESK_OBSERVABILITY_FAILED",
        }
    }
}

impl fmt::Display for ObservabilityErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Observability error
///
/// Never fatal on its own; callers decide whether to continue without logs.
#[derive(Debug)]
pub struct ObservabilityError {
    code: ObservabilityErrorCode,
    message: String,
}

impl ObservabilityError {
    /// Create a new observability error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: ObservabilityErrorCode::ObservabilityFailed,
            message: message.into(),
        }
    }

    /// Get the error code
    pub fn code(&self) -> ObservabilityErrorCode {
        self.code
    }

    /// Get the message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ObservabilityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ObservabilityError {}

/// Result type for observability operations
pub type ObservabilityResult<T> = Result<T, ObservabilityError>;

/// Log a lifecycle event
pub fn log_event(event: Event) {
    if event.is_fatal() {
        tracing::error!(event = event.as_str());
    } else {
        tracing::info!(event = event.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observability_error_code() {
        let err = ObservabilityError::new("test error");
        assert_eq!(err.code(), ObservabilityErrorCode::ObservabilityFailed);
        assert_eq!(err.message(), "test error");
    }

    #[test]
    fn test_observability_error_display() {
        let err = ObservabilityError::new("test message");
        let display = format!("{}", err);
        assert!(display.contains("DOUBTDESK_OBSERVABILITY_FAILED"));
        assert!(display.contains("test message"));
    }

    #[test]
    fn test_log_event_without_subscriber() {
        // No subscriber installed: events are dropped, never panic
        log_event(Event::BootStart);
        log_event(Event::ServerFailed);
    }
}
