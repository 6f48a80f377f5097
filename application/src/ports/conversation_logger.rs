//! Port for structured transcript logging.
//!
//! Separate from `tracing`: tracing carries diagnostics, this port records
//! every chat turn in a machine-readable form (JSONL).

use serde_json::Value;

/// A structured transcript event
pub struct ConversationEvent {
    /// Event type identifier (`session_created`, `user_message`, ...)
    pub event_type: &'static str,
    /// JSON payload with event-specific data
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging transcript events.
///
/// `log` is synchronous and infallible; write failures are dropped by the
/// implementation.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
