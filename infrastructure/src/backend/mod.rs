//! HTTP adapter for the chat backend
//!
//! Implements [`ChatGateway`](orderchat_application::ChatGateway) over
//! JSON-over-HTTP with `reqwest`.

pub mod error;
pub mod gateway;
