//! Chat session domain.
//!
//! - [`entities::ChatSession`]: one chat thread and its order state
//! - [`entities::Message`]: a single transcript entry
//! - [`exchange`]: the request/reply pair of one user turn
//! - [`order`]: order summaries produced by the backend
//! - [`store::SessionStore`]: every session of the process plus the active selection

pub mod entities;
pub mod exchange;
pub mod order;
pub mod store;
