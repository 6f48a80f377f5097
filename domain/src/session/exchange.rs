//! Chat turn wire types
//!
//! One request/response pair per user turn. The conversation token is
//! opaque: it is echoed back on the next request and never interpreted.

use super::order::OrderSummary;
use serde::{Deserialize, Serialize};

/// Body of `POST /chat`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    pub message: String,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>, conversation_id: Option<&str>) -> Self {
        Self {
            session_id: conversation_id.map(str::to_string),
            message: message.into(),
        }
    }
}

/// Response of `POST /chat`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
    pub session_id: String,
    #[serde(default)]
    pub finalized: bool,
    /// Absent means "no change", never "clear the order"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<OrderSummary>,
}

/// Response of the backend health check (`GET /`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendStatus {
    pub message: String,
}
