//! Terminal User Interface module
//!
//! The four app screens (login, dashboard, voice expense, assistant chat)
//! rendered with ratatui, plus toasts and a help overlay.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::{App, Screen};
pub use terminal::run_tui;
