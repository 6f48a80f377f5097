//! Chat gateway port
//!
//! Defines the interface for talking to the ordering backend.

use async_trait::async_trait;
use orderchat_domain::{BackendStatus, ChatReply, ChatRequest, Menu, OrderRecord};
use thiserror::Error;

/// Errors that can occur while talking to the backend
///
/// All of them are one failure class to the chat flow: the turn failed and
/// the user may retry.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Could not decode backend response: {0}")]
    Decode(String),

    #[error("Timeout")]
    Timeout,
}

/// Gateway to the chat backend
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ChatGateway: Send + Sync {
    /// Send one user turn and wait for the reply
    async fn send_turn(&self, request: &ChatRequest) -> Result<ChatReply, GatewayError>;

    /// Orders the backend has recorded (admin view)
    async fn list_orders(&self) -> Result<Vec<OrderRecord>, GatewayError>;

    /// Items, combos and extras on sale
    async fn menus(&self) -> Result<Menu, GatewayError>;

    /// Health check
    async fn status(&self) -> Result<BackendStatus, GatewayError>;
}
