//! Console output formatter for chats and orders

use colored::Colorize;
use orderchat_application::OrderListing;
use orderchat_domain::core::string::preview;
use orderchat_domain::{
    ChatSession, Menu, MenuItem, Message, OrderItem, OrderSummary, Sender, SessionStore,
    format_money,
};

/// Formats chat state for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Banner shown when the chat starts
    pub fn welcome(base_url: &str) -> String {
        let mut output = String::new();
        output.push('\n');
        output.push_str(&Self::header("Fast-Food Order Chat"));
        output.push_str(&format!("\n{} {}\n\n", "Backend:".cyan().bold(), base_url));
        output.push_str("Start a chat with /new, then type your order. /menu shows what's on sale.\n");
        output.push_str("Run `order-chat admin` to see every recorded order.\n");
        output.push_str(&Self::help());
        output
    }

    pub fn help() -> String {
        let mut output = String::new();
        output.push('\n');
        output.push_str(&format!("{}\n", "Commands:".cyan().bold()));
        output.push_str("  /new            - Start a new chat\n");
        output.push_str("  /chats          - List chats\n");
        output.push_str("  /switch <n>     - Switch to chat number n\n");
        output.push_str("  /show           - Show the active chat again\n");
        output.push_str("  /orders         - List recorded orders\n");
        output.push_str("  /menu [category] - Show the menu\n");
        output.push_str("  /help, /h, /?   - Show this help\n");
        output.push_str("  /quit, /exit, /q - Exit\n");
        output
    }

    /// Hint shown when there is nothing to send to
    pub fn empty_state() -> String {
        format!("{}", "Select a chat or start a new one.".dimmed())
    }

    /// Chat list, active chat marked
    pub fn format_session_list(store: &SessionStore) -> String {
        if store.is_empty() {
            return format!("{}\n", "No chats yet. Start one with /new.".dimmed());
        }

        let mut output = format!("{}\n", "Chats:".cyan().bold());
        for (index, session) in store.sessions().iter().enumerate() {
            let active = store.active_id() == Some(session.id());
            let marker = if active { "*" } else { " " };
            let line = format!("{} {}. {}", marker, index + 1, session.name());
            let line = if active { line.green().bold() } else { line.normal() };

            let state = if session.is_finalized() {
                " [finalized]".yellow()
            } else if session.is_loading() {
                " [waiting]".dimmed()
            } else {
                "".normal()
            };

            let last = session
                .messages()
                .last()
                .map(|m| format!("  {}", preview(&m.text, 40).dimmed()))
                .unwrap_or_default();

            output.push_str(&format!("{}{}{}\n", line, state, last));
        }
        output
    }

    /// Full transcript of one chat, with loading and order state
    pub fn format_transcript(session: &ChatSession) -> String {
        let mut output = format!("{}\n{}\n", session.name().cyan().bold(), "-".repeat(40));

        for message in session.messages() {
            output.push_str(&Self::format_message(message));
            output.push('\n');
        }

        if session.is_loading() {
            output.push_str(&format!("{}\n", "System is typing...".dimmed().italic()));
        }

        if let Some(order) = session.final_order() {
            output.push('\n');
            output.push_str(&Self::format_order_summary(order));
        }

        output
    }

    pub fn format_message(message: &Message) -> String {
        match message.sender {
            Sender::User => format!("{} {}", "You:".green().bold(), message.text),
            Sender::System if message.llm => format!(
                "{} {} {}",
                "System:".yellow().bold(),
                message.text,
                "[LLM]".dimmed()
            ),
            Sender::System => format!("{} {}", "System:".red().bold(), message.text.red()),
        }
    }

    pub fn format_order_summary(order: &OrderSummary) -> String {
        let mut output = format!("{}\n", "Order Summary".green().bold());
        for item in &order.items {
            output.push_str(&format!("  {}\n", Self::format_item(item)));
        }
        output.push_str(&format!(
            "{}\n",
            format!("Total: {}", format_money(order.total)).green().bold()
        ));
        output
    }

    /// `Big Mac - $5.99`, `Coke (large) - $1.99`; price omitted when unknown
    pub fn format_item(item: &OrderItem) -> String {
        let mut line = item.name.clone();
        if let Some(size) = &item.size {
            line.push_str(&format!(" ({})", size));
        }
        if let Some(price) = item.price {
            line.push_str(&format!(" - {}", format_money(price)));
        }
        line
    }

    /// Admin listing of recorded orders
    pub fn format_orders(listing: &OrderListing) -> String {
        let mut output = String::new();
        output.push_str(&Self::header("Admin Panel"));
        output.push('\n');

        if listing.is_empty() {
            output.push_str(&format!("\n{}\n", "No orders yet.".dimmed()));
            output.push_str(&Self::footer());
            return output;
        }

        for record in &listing.orders {
            output.push_str(&format!(
                "\n{} {}\n",
                format!("Order {}", record.summary.order_id).yellow().bold(),
                format!("(conversation {})", record.session_id).dimmed()
            ));
            for item in &record.summary.items {
                output.push_str(&format!("  {}\n", Self::format_item(item)));
            }
            output.push_str(&format!("  Total: {}\n", format_money(record.summary.total)));
        }

        output.push_str(&format!(
            "\n{} {} orders, {}\n",
            "Summary:".cyan().bold(),
            listing.orders.len(),
            format_money(listing.revenue)
        ));
        output.push_str(&Self::footer());
        output
    }

    /// Format orders as JSON
    pub fn format_orders_json(listing: &OrderListing) -> String {
        serde_json::to_string_pretty(&listing.orders).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn format_menu(menu: &Menu) -> String {
        let mut output = String::new();
        output.push_str(&Self::header("Menu"));
        output.push('\n');

        if menu.is_empty() {
            output.push_str(&format!("\n{}\n", "Nothing on the menu.".dimmed()));
            output.push_str(&Self::footer());
            return output;
        }

        for (title, items) in menu.sections() {
            output.push_str(&format!("\n{}\n", title.yellow().bold()));
            for item in items {
                output.push_str(&format!("  {}\n", Self::format_menu_item(item)));
            }
        }
        output.push_str(&Self::footer());
        output
    }

    /// `Big Mac - $5.99 (burgers)`; price and category omitted when unknown
    pub fn format_menu_item(item: &MenuItem) -> String {
        let mut line = item.name.clone();
        if let Some(price) = item.price {
            line.push_str(&format!(" - {}", format_money(price)));
        }
        if let Some(category) = &item.category {
            line.push_str(&format!(" {}", format!("({})", category).dimmed()));
        }
        line
    }

    pub fn format_menu_json(menu: &Menu) -> String {
        serde_json::to_string_pretty(menu).unwrap_or_else(|_| "{}".to_string())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}
