//! REPL (Read-Eval-Print Loop) for interactive ordering
//!
//! Every chat turn runs on its own task. The prompt stays usable while a
//! reply is pending; replies are printed above the prompt when they land.

use super::commands::ReplCommand;
use crate::config::ReplConfig;
use crate::output::console::ConsoleFormatter;
use crate::progress::spinner::Spinner;
use colored::Colorize;
use orderchat_application::{
    ChatGateway, ChatUseCase, ConversationLogger, ListOrdersUseCase, SendError, SendOutcome,
    ShowMenuUseCase,
};
use orderchat_domain::SessionId;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, ExternalPrinter, Result as RlResult};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::task::JoinHandle;

/// What the REPL does after a line
#[derive(Debug, Default)]
pub struct Step {
    /// Text to print (may be empty)
    pub output: String,
    pub exit: bool,
    /// Turn dispatched by this line, still running
    pub pending: Option<JoinHandle<()>>,
}

impl Step {
    fn print(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            ..Self::default()
        }
    }

    fn exit() -> Self {
        Self {
            output: "Bye!".to_string(),
            exit: true,
            pending: None,
        }
    }
}

type BoxedPrinter = Box<dyn ExternalPrinter + Send>;

/// Destination for replies that land while the prompt is active
#[derive(Clone, Default)]
struct ReplyPrinter(Arc<Mutex<Option<BoxedPrinter>>>);

impl ReplyPrinter {
    fn install(&self, printer: BoxedPrinter) {
        *self.lock() = Some(printer);
    }

    fn lock(&self) -> MutexGuard<'_, Option<BoxedPrinter>> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn print(&self, message: String) {
        if message.is_empty() {
            return;
        }
        match self.lock().as_mut() {
            Some(printer) => {
                if let Err(err) = printer.print(message) {
                    eprintln!("Error: {:?}", err);
                }
            }
            None => println!("{}", message),
        }
    }
}

/// Interactive chat REPL
pub struct ChatRepl<G: ChatGateway + 'static> {
    chat: ChatUseCase<G>,
    orders: ListOrdersUseCase<G>,
    menu: ShowMenuUseCase<G>,
    config: ReplConfig,
    backend_label: String,
    printer: ReplyPrinter,
}

impl<G: ChatGateway + 'static> ChatRepl<G> {
    /// Create a new ChatRepl
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            chat: ChatUseCase::new(Arc::clone(&gateway)),
            orders: ListOrdersUseCase::new(Arc::clone(&gateway)),
            menu: ShowMenuUseCase::new(gateway),
            config: ReplConfig::default(),
            backend_label: String::new(),
            printer: ReplyPrinter::default(),
        }
    }

    /// Record a transcript of every turn
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.chat = self.chat.with_conversation_logger(logger);
        self
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Backend address shown in the welcome banner
    pub fn with_backend_label(mut self, label: impl Into<String>) -> Self {
        self.backend_label = label.into();
        self
    }

    /// Run the interactive REPL
    ///
    /// Needs the multi-threaded runtime: the prompt blocks its worker while
    /// pending turns finish elsewhere.
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;
        if let Ok(printer) = rl.create_external_printer() {
            self.printer.install(Box::new(printer));
        }

        let history_path = self.config.history_path();
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        println!("{}", ConsoleFormatter::welcome(&self.backend_label));

        let mut pending: Vec<JoinHandle<()>> = Vec::new();
        loop {
            let prompt = self.prompt();
            match tokio::task::block_in_place(|| rl.readline(&prompt)) {
                Ok(line) => {
                    let line = line.trim();

                    // Whitespace-only input sends nothing
                    if line.is_empty() {
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    let step = self.handle_line(line).await;
                    if !step.output.is_empty() {
                        println!("{}", step.output);
                    }
                    pending.retain(|handle| !handle.is_finished());
                    pending.extend(step.pending);
                    if step.exit {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        pending.retain(|handle| !handle.is_finished());
        if !pending.is_empty() {
            println!(
                "{}",
                format!("{} replies were still pending and are discarded.", pending.len()).dimmed()
            );
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn prompt(&self) -> String {
        match self.chat.active_session() {
            Some(session) if session.accepts_input() => format!("{}> ", session.name()),
            Some(session) if session.is_finalized() => format!("{} [finalized]> ", session.name()),
            Some(session) => format!("{} [waiting]> ", session.name()),
            None => "> ".to_string(),
        }
    }

    /// Handle one non-empty input line
    pub async fn handle_line(&self, line: &str) -> Step {
        match ReplCommand::parse(line) {
            Some(command) => self.handle_command(command).await,
            None => self.dispatch(line),
        }
    }

    async fn handle_command(&self, command: ReplCommand) -> Step {
        match command {
            ReplCommand::Quit => Step::exit(),
            ReplCommand::Help => Step::print(ConsoleFormatter::help()),
            ReplCommand::New => {
                let id = self.chat.create_session();
                let name = self
                    .chat
                    .session(id)
                    .map(|s| s.name().to_string())
                    .unwrap_or_default();
                Step::print(format!("Started {}. What can I get you?", name.green().bold()))
            }
            ReplCommand::Chats => {
                Step::print(ConsoleFormatter::format_session_list(&self.chat.snapshot()))
            }
            ReplCommand::Switch(position) => match self.chat.select_position(position) {
                Ok(id) => match self.chat.session(id) {
                    Ok(session) => Step::print(ConsoleFormatter::format_transcript(&session)),
                    Err(e) => Step::print(e.to_string().red().to_string()),
                },
                Err(e) => Step::print(e.to_string().red().to_string()),
            },
            ReplCommand::Show => match self.chat.active_session() {
                Some(session) => Step::print(ConsoleFormatter::format_transcript(&session)),
                None => Step::print(ConsoleFormatter::empty_state()),
            },
            ReplCommand::Orders => {
                let spinner = Spinner::start("Loading orders...", self.config.show_progress);
                let result = self.orders.execute().await;
                spinner.finish();
                match result {
                    Ok(listing) => Step::print(ConsoleFormatter::format_orders(&listing)),
                    Err(e) => Step::print(format!("{} {}", "Could not load orders:".red(), e)),
                }
            }
            ReplCommand::Menu(category) => {
                let spinner = Spinner::start("Loading menu...", self.config.show_progress);
                let result = self.menu.execute(category.as_deref()).await;
                spinner.finish();
                match result {
                    Ok(menu) => Step::print(ConsoleFormatter::format_menu(&menu)),
                    Err(e) => Step::print(format!("{} {}", "Could not load the menu:".red(), e)),
                }
            }
            ReplCommand::Usage(usage) => Step::print(format!("Usage: {}", usage)),
            ReplCommand::Unknown(cmd) => Step::print(format!(
                "Unknown command: {}\nType /help for available commands",
                cmd
            )),
        }
    }

    /// Hand a line to the active chat; the reply is printed when it lands
    fn dispatch(&self, text: &str) -> Step {
        self.chat.set_input(text);
        let turn = match self.chat.begin_input() {
            Ok(turn) => turn,
            Err(SendError::NoActiveSession) => return Step::print(ConsoleFormatter::empty_state()),
            Err(SendError::Rejected(e)) => return Step::print(e.to_string().yellow().to_string()),
        };

        let id = turn.session_id();
        let name = self
            .chat
            .session(id)
            .map(|s| s.name().to_string())
            .unwrap_or_default();

        let chat = self.chat.clone();
        let printer = self.printer.clone();
        let handle = tokio::spawn(async move {
            let outcome = turn.complete().await;
            printer.print(render_turn(&chat, id, &outcome));
        });

        Step {
            output: format!(
                "{} {}",
                chat_label(&name),
                "System is typing...".dimmed().italic()
            ),
            exit: false,
            pending: Some(handle),
        }
    }
}

fn chat_label(name: &str) -> String {
    format!("[{}]", name).cyan().to_string()
}

/// Newest message of a chat, plus the order summary when this turn closed it
fn render_turn<G: ChatGateway + 'static>(
    chat: &ChatUseCase<G>,
    id: SessionId,
    outcome: &SendOutcome,
) -> String {
    let Ok(session) = chat.session(id) else {
        return String::new();
    };
    let Some(last) = session.messages().last() else {
        return String::new();
    };

    let mut output = format!(
        "{} {}",
        chat_label(session.name()),
        ConsoleFormatter::format_message(last)
    );

    if matches!(outcome, SendOutcome::Replied { finalized: true })
        && let Some(order) = session.final_order()
    {
        output.push_str("\n\n");
        output.push_str(&ConsoleFormatter::format_order_summary(order));
    }
    output
}
