//! Domain error types

use crate::session::entities::SessionId;
use thiserror::Error;

/// Domain-level errors
///
/// Every variant describes a rejected store operation. A rejected
/// operation leaves the store exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown session: {0}")]
    UnknownSession(SessionId),

    #[error("No chat at position {0}")]
    NoSessionAt(usize),

    #[error("Message is empty")]
    EmptyMessage,

    #[error("Order is finalized; this chat no longer accepts messages")]
    SessionFinalized,

    #[error("Still waiting for the previous reply")]
    AwaitingResponse,

    #[error("No reply is pending for this chat")]
    NoPendingTurn,
}

impl DomainError {
    /// Check if this error is a lookup failure rather than a rejected send
    pub fn is_lookup(&self) -> bool {
        matches!(
            self,
            DomainError::UnknownSession(_) | DomainError::NoSessionAt(_)
        )
    }
}
