//! Configuration file loading for order-chat
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `ORDER_CHAT_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./order-chat.toml` or `./.order-chat.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/order-chat/config.toml`
//! 5. Default values

mod file_config;
mod loader;
mod validation;

pub use file_config::{
    FileBackendConfig, FileConfig, FileLoggingConfig, FileOutputConfig, FileReplConfig,
};
pub use loader::ConfigLoader;
pub use validation::{ConfigIssue, ConfigIssueCode, Severity};
