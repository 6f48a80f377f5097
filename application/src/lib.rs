//! Application layer for order-chat
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    chat_gateway::{ChatGateway, GatewayError},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
};
pub use use_cases::chat::{ChatUseCase, PendingTurn, SendError, SendOutcome};
pub use use_cases::list_orders::{ListOrdersUseCase, OrderListing};
pub use use_cases::show_menu::ShowMenuUseCase;
