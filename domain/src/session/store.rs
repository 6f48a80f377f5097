//! In-memory session store
//!
//! Holds every chat session of the process, the active selection and the
//! shared input buffer. All mutation of chat state goes through here.

use super::entities::{ChatSession, SessionId};
use super::exchange::{ChatReply, ChatRequest};
use crate::core::error::DomainError;

/// Collection of chat sessions plus the active selection
///
/// Sessions are only ever appended; there is no close or delete.
#[derive(Debug, Default, Clone)]
pub struct SessionStore {
    sessions: Vec<ChatSession>,
    active: Option<SessionId>,
    input: String,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session named after its creation order and make it active.
    pub fn create_session(&mut self) -> SessionId {
        let id = SessionId::new();
        let name = format!("Chat {}", self.sessions.len() + 1);

        self.sessions.push(ChatSession::new(id, name));
        self.active = Some(id);
        self.input.clear();
        id
    }

    /// Select a session. Unknown ids leave the selection unchanged.
    pub fn set_active_session(&mut self, id: SessionId) -> Result<(), DomainError> {
        self.session(id)?;
        self.active = Some(id);
        Ok(())
    }

    pub fn active_id(&self) -> Option<SessionId> {
        self.active
    }

    pub fn active_session(&self) -> Option<&ChatSession> {
        self.active.and_then(|id| self.session(id).ok())
    }

    pub fn session(&self, id: SessionId) -> Result<&ChatSession, DomainError> {
        self.sessions
            .iter()
            .find(|s| s.id() == id)
            .ok_or(DomainError::UnknownSession(id))
    }

    /// Look up a session by its 1-based position in creation order
    pub fn session_by_position(&self, position: usize) -> Result<&ChatSession, DomainError> {
        position
            .checked_sub(1)
            .and_then(|index| self.sessions.get(index))
            .ok_or(DomainError::NoSessionAt(position))
    }

    pub fn sessions(&self) -> &[ChatSession] {
        &self.sessions
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// First half of a send: append the user message, mark the session as
    /// awaiting a reply and clear the input buffer.
    ///
    /// On rejection nothing changes, including the input buffer.
    pub fn begin_send(&mut self, id: SessionId, text: &str) -> Result<ChatRequest, DomainError> {
        let request = self.session_mut(id)?.begin_turn(text)?;
        self.input.clear();
        Ok(request)
    }

    /// Second half of a successful send
    pub fn complete_send(&mut self, id: SessionId, reply: ChatReply) -> Result<(), DomainError> {
        self.session_mut(id)?.complete_turn(reply)
    }

    /// Second half of a failed send
    pub fn fail_send(&mut self, id: SessionId) -> Result<(), DomainError> {
        self.session_mut(id)?.fail_turn()
    }

    fn session_mut(&mut self, id: SessionId) -> Result<&mut ChatSession, DomainError> {
        self.sessions
            .iter_mut()
            .find(|s| s.id() == id)
            .ok_or(DomainError::UnknownSession(id))
    }
}
