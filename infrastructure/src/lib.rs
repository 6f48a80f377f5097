//! Infrastructure layer for order-chat
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration file loading.

pub mod backend;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use backend::{
    error::HttpError,
    gateway::{DEFAULT_BASE_URL, HttpChatGateway},
};
pub use config::{
    ConfigIssue, ConfigLoader, FileBackendConfig, FileConfig, FileLoggingConfig,
    FileOutputConfig, FileReplConfig, Severity,
};
pub use logging::JsonlConversationLogger;
