//! CLI entrypoint for order-chat
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use orderchat_application::{ChatGateway, ConversationLogger, ListOrdersUseCase, ShowMenuUseCase};
use orderchat_infrastructure::{
    ConfigLoader, FileConfig, HttpChatGateway, JsonlConversationLogger, Severity,
};
use orderchat_presentation::{
    ChatRepl, Cli, Command, ConsoleFormatter, OutputConfig, ReplConfig, Spinner,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    info!("Starting order-chat");

    let config = load_config(&cli)?;

    OutputConfig {
        color: config.output.color && !cli.no_color,
    }
    .apply();

    // === Dependency Injection ===
    let gateway = Arc::new(
        HttpChatGateway::new(&config.backend.base_url, config.backend.timeout())
            .context("Failed to create backend gateway")?,
    );

    let show_progress = config.repl.show_progress && !cli.quiet;

    match cli.selected_command() {
        Command::Chat => {
            let repl_config = ReplConfig {
                show_progress,
                history_file: config.repl.history_file.clone(),
            };

            let mut repl = ChatRepl::new(gateway)
                .with_config(repl_config)
                .with_backend_label(config.backend.base_url.clone());

            if let Some(logger) = transcript_logger(&cli, &config) {
                repl = repl.with_conversation_logger(logger);
            }

            repl.run().await?;
        }
        Command::Admin { json } => {
            let spinner = Spinner::start("Loading orders...", show_progress);
            let result = ListOrdersUseCase::new(gateway).execute().await;
            spinner.finish();
            let listing = result.context("Could not load orders")?;

            let output = if json {
                ConsoleFormatter::format_orders_json(&listing)
            } else {
                ConsoleFormatter::format_orders(&listing)
            };
            println!("{}", output);
        }
        Command::Menu { category, json } => {
            let spinner = Spinner::start("Loading menu...", show_progress);
            let result = ShowMenuUseCase::new(gateway)
                .execute(category.as_deref())
                .await;
            spinner.finish();
            let menu = result.context("Could not load the menu")?;

            let output = if json {
                ConsoleFormatter::format_menu_json(&menu)
            } else {
                ConsoleFormatter::format_menu(&menu)
            };
            println!("{}", output);
        }
        Command::Ping => {
            let spinner = Spinner::start("Contacting backend...", show_progress);
            let result = gateway.status().await;
            spinner.finish();
            let status = result
                .with_context(|| format!("Backend at {} is not reachable", config.backend.base_url))?;
            println!("{}", status.message);
        }
    }

    Ok(())
}

/// Load file config, apply command-line overrides, then validate
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };

    if let Some(url) = &cli.backend_url {
        config.backend.base_url = url.clone();
    }
    if let Some(seconds) = cli.timeout {
        config.backend.timeout_seconds = Some(seconds);
    }

    for issue in config.validate() {
        match issue.severity {
            Severity::Error => eprintln!("{}", issue),
            Severity::Warning => warn!("{}", issue),
        }
    }
    if config.has_errors() {
        bail!("Invalid configuration");
    }

    Ok(config)
}

/// Transcript logger from --log-transcript or `logging.transcript_file`
fn transcript_logger(cli: &Cli, config: &FileConfig) -> Option<Arc<dyn ConversationLogger>> {
    let path = cli.log_transcript.clone().or_else(|| {
        config
            .logging
            .transcript_file
            .as_deref()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
    })?;

    let logger = JsonlConversationLogger::open(&path)?;
    info!("Writing transcript to {}", logger.path().display());
    Some(Arc::new(logger))
}
