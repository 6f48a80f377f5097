//! Slash commands understood by the chat REPL

/// A parsed REPL command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    New,
    Chats,
    Switch(usize),
    Show,
    Orders,
    /// Menu, optionally one category
    Menu(Option<String>),
    Help,
    Quit,
    /// Known command with bad arguments; carries the usage hint
    Usage(&'static str),
    Unknown(String),
}

impl ReplCommand {
    /// Parse a line starting with `/`. Returns `None` for ordinary text.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let rest = line.strip_prefix('/')?;
        let mut parts = rest.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let arg = parts.next();

        let command = match name {
            "new" | "n" => ReplCommand::New,
            "chats" | "ls" => ReplCommand::Chats,
            "switch" | "s" => match arg.and_then(|a| a.parse().ok()) {
                Some(position) => ReplCommand::Switch(position),
                None => ReplCommand::Usage("/switch <n>  (see /chats for numbers)"),
            },
            "show" => ReplCommand::Show,
            "orders" => ReplCommand::Orders,
            "menu" | "m" => ReplCommand::Menu(arg.map(str::to_string)),
            "help" | "h" | "?" => ReplCommand::Help,
            "quit" | "exit" | "q" => ReplCommand::Quit,
            _ => ReplCommand::Unknown(line.to_string()),
        };
        Some(command)
    }
}
