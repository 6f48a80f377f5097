//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Screens reachable from the command line
#[derive(Subcommand, Debug, Clone, PartialEq, Eq, Default)]
pub enum Command {
    /// Interactive order chat (default)
    #[default]
    Chat,
    /// List the orders the backend has recorded
    Admin {
        /// Print the orders as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the backend's menu
    Menu {
        /// Only items of this category (e.g. burgers, desserts)
        category: Option<String>,
        /// Print the menu as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check that the backend is reachable
    Ping,
}

/// CLI arguments for order-chat
#[derive(Parser, Debug)]
#[command(name = "order-chat")]
#[command(author, version, about = "Chat with a fast-food ordering backend")]
#[command(long_about = r#"
order-chat simulates ordering at a fast-food counter. Each chat is sent to
the ordering backend, which replies, tracks the order and eventually
finalizes it with an order summary.

Several chats can be open at once; switch between them with /switch.

Configuration files are loaded from (in priority order):
1. --config <path>          Explicit config file
2. ./order-chat.toml        Project-level config
3. ~/.config/order-chat/config.toml   Global config

Example:
  order-chat
  order-chat --backend-url http://localhost:8000 chat
  order-chat admin --json
  order-chat menu desserts
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Base URL of the chat backend
    #[arg(long, value_name = "URL", global = true)]
    pub backend_url: Option<String>,

    /// Request timeout in seconds (default: wait indefinitely)
    #[arg(long, value_name = "SECS", global = true)]
    pub timeout: Option<u64>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress loading spinners
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Append a JSONL transcript of every chat turn to this file
    #[arg(long, value_name = "PATH", global = true)]
    pub log_transcript: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Subcommand to run; chat when none is given
    pub fn selected_command(&self) -> Command {
        self.command.clone().unwrap_or_default()
    }
}
