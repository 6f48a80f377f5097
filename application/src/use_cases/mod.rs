//! Use cases (application services)

pub mod chat;
pub mod list_orders;
pub mod show_menu;
