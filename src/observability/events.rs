//! Observable lifecycle events
//!
//! Events are explicit and typed. Each is emitted as the `event` field of a
//! `tracing` record so log consumers can filter on a stable name.

use std::fmt;

/// Observable events in doubtdesk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Startup begins
    BootStart,
    /// Configuration loaded and validated
    ConfigLoaded,
    /// Listener bound, ready for requests
    Serving,
    /// Server stopped
    ShutdownComplete,
    /// Server failed to start or crashed
    ServerFailed,

    // Explanation requests
    /// An explanation was selected and rendered
    ExplainComplete,
    /// A catalog lookup referenced an unknown branch or subject
    CatalogMiss,

    // Self-test
    /// Verification started
    VerifyBegin,
    /// Verification finished with every canonical doubt passing
    VerifyComplete,
    /// A canonical doubt resolved to a fallback
    VerifyFailed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "DOUBTDESK_STARTUP_BEGIN",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::Serving => "DOUBTDESK_SERVING",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",
            Event::ServerFailed => "SERVER_FAILED",

            Event::ExplainComplete => "EXPLAIN_COMPLETE",
            Event::CatalogMiss => "CATALOG_MISS",

            Event::VerifyBegin => "VERIFY_BEGIN",
            Event::VerifyComplete => "VERIFY_COMPLETE",
            Event::VerifyFailed => "VERIFY_FAILED",
        }
    }

    /// Returns true if this event indicates a fatal condition
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::ServerFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_events_have_string_representation() {
        let events = [
            Event::BootStart,
            Event::ConfigLoaded,
            Event::Serving,
            Event::ShutdownComplete,
            Event::ServerFailed,
            Event::ExplainComplete,
            Event::CatalogMiss,
            Event::VerifyBegin,
            Event::VerifyComplete,
            Event::VerifyFailed,
        ];

        for event in events {
            let s = event.as_str();
            assert!(!s.is_empty());
            assert!(s.chars().all(|c| c.is_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_fatal_events() {
        assert!(Event::ServerFailed.is_fatal());
        assert!(!Event::Serving.is_fatal());
        assert!(!Event::VerifyFailed.is_fatal());
    }

    #[test]
    fn test_event_display() {
        assert_eq!(format!("{}", Event::BootStart), "DOUBTDESK_STARTUP_BEGIN");
        assert_eq!(format!("{}", Event::ExplainComplete), "EXPLAIN_COMPLETE");
    }
}
