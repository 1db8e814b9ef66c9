//! Paisa Tracker - voice-first expense tracking for Indian households
//!
//! This library provides the core functionality for the Paisa Tracker
//! application: a mock phone login, an income-based dashboard, expense
//! entry from spoken transcripts and a scripted finance assistant, in
//! Hindi and English.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `locale`: Hindi and English strings
//! - `models`: Core data models (phone numbers, brackets, expenses, messages)
//! - `services`: Business logic layer (login, dashboard, parsing, assistant, speech)
//! - `display`: Plain-text output for the CLI
//! - `cli`: Non-interactive command handlers
//! - `tui`: Interactive terminal interface
//! - `logging`: File-based tracing setup
//!
//! # Example
//!
//! ```rust,ignore
//! use paisa::services::ExpenseParser;
//!
//! let parser = ExpenseParser::new()?;
//! let parsed = parser.parse("Spent 200 rupees on vegetables");
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod locale;
pub mod logging;
pub mod models;
pub mod services;
pub mod tui;

pub use error::{PaisaError, PaisaResult};
