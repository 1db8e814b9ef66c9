//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod ask;
pub mod dashboard;
pub mod parse;
pub mod setup;

pub use ask::{handle_ask_command, handle_faq_command, AskArgs, FaqArgs};
pub use dashboard::{handle_dashboard_command, DashboardArgs};
pub use parse::{handle_parse_command, ParseArgs};
pub use setup::{handle_config_command, handle_init_command};
