//! Session domain entities

use super::exchange::{ChatReply, ChatRequest};
use super::order::OrderSummary;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Text shown in place of a reply when the backend cannot be reached
pub const BACKEND_UNREACHABLE: &str = "Error: Could not reach backend.";

/// Locally generated identifier of a chat session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Who wrote a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    System,
}

/// A message in a chat transcript (Entity)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
    /// Set on replies produced by the backend's generative path
    pub llm: bool,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
            llm: false,
        }
    }

    pub fn reply(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::System,
            text: text.into(),
            llm: true,
        }
    }

    pub fn backend_unreachable() -> Self {
        Self {
            sender: Sender::System,
            text: BACKEND_UNREACHABLE.to_string(),
            llm: false,
        }
    }
}

/// Request state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    #[default]
    Idle,
    AwaitingResponse,
}

/// One chat thread with the ordering backend (Entity)
///
/// Fields are private: the transcript only grows through
/// [`begin_turn`](Self::begin_turn) followed by exactly one of
/// [`complete_turn`](Self::complete_turn) or [`fail_turn`](Self::fail_turn).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatSession {
    id: SessionId,
    name: String,
    conversation_id: String,
    messages: Vec<Message>,
    status: SessionStatus,
    finalized: bool,
    order_summary: Option<OrderSummary>,
}

impl ChatSession {
    pub fn new(id: SessionId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            conversation_id: String::new(),
            messages: Vec::new(),
            status: SessionStatus::Idle,
            finalized: false,
            order_summary: None,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Backend conversation token, `None` until the first successful reply
    pub fn conversation_id(&self) -> Option<&str> {
        if self.conversation_id.is_empty() {
            None
        } else {
            Some(&self.conversation_id)
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == SessionStatus::AwaitingResponse
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    pub fn order_summary(&self) -> Option<&OrderSummary> {
        self.order_summary.as_ref()
    }

    /// Whether the input for this session should accept text
    pub fn accepts_input(&self) -> bool {
        !self.finalized && !self.is_loading()
    }

    /// Order to show under the transcript: only once the order is closed
    pub fn final_order(&self) -> Option<&OrderSummary> {
        if self.finalized {
            self.order_summary.as_ref()
        } else {
            None
        }
    }

    /// Start a turn: append the user message and move to `AwaitingResponse`.
    ///
    /// Returns the request to send to the backend.
    pub(crate) fn begin_turn(&mut self, text: &str) -> Result<ChatRequest, DomainError> {
        if text.trim().is_empty() {
            return Err(DomainError::EmptyMessage);
        }
        if self.finalized {
            return Err(DomainError::SessionFinalized);
        }
        if self.is_loading() {
            return Err(DomainError::AwaitingResponse);
        }

        self.messages.push(Message::user(text));
        self.status = SessionStatus::AwaitingResponse;

        Ok(ChatRequest::new(text, self.conversation_id()))
    }

    /// Apply a successful backend reply.
    pub(crate) fn complete_turn(&mut self, reply: ChatReply) -> Result<(), DomainError> {
        if !self.is_loading() {
            return Err(DomainError::NoPendingTurn);
        }

        self.messages.push(Message::reply(reply.response));
        self.conversation_id = reply.session_id;
        self.finalized = reply.finalized;
        if let Some(order) = reply.order {
            self.order_summary = Some(order);
        }
        self.status = SessionStatus::Idle;
        Ok(())
    }

    /// Record a transport failure; only the transcript and status change.
    pub(crate) fn fail_turn(&mut self) -> Result<(), DomainError> {
        if !self.is_loading() {
            return Err(DomainError::NoPendingTurn);
        }

        self.messages.push(Message::backend_unreachable());
        self.status = SessionStatus::Idle;
        Ok(())
    }
}
