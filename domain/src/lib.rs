//! Domain layer for order-chat
//!
//! This crate contains the chat session entities, the order value objects
//! and the in-memory session store. It has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Session
//!
//! A session is one local chat thread (`Chat N`). It owns an append-only
//! transcript, an opaque conversation token issued by the backend and the
//! order state the backend reports.
//!
//! ## Turn
//!
//! Each user message is one turn: the store appends the message and marks
//! the session as awaiting a reply, then exactly one outcome (reply or
//! transport failure) is applied. A session accepts no new turn while one
//! is pending, and none at all once its order is finalized.
//!
//! ## Menu
//!
//! The read-only list of items, combos and extras the backend sells.

pub mod core;
pub mod menu;
pub mod session;

// Re-export commonly used types
pub use core::{error::DomainError, string::format_money};
pub use menu::entities::{Menu, MenuItem, Upsells, VirtualItems};
pub use session::{
    entities::{BACKEND_UNREACHABLE, ChatSession, Message, Sender, SessionId, SessionStatus},
    exchange::{BackendStatus, ChatReply, ChatRequest},
    order::{OrderItem, OrderRecord, OrderSummary},
    store::SessionStore,
};
