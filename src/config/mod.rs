//! Configuration module for Paisa Tracker
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - User settings persistence
//! - Speech and timing preferences

pub mod paths;
pub mod settings;

pub use paths::PaisaPaths;
pub use settings::{CommandSpec, Settings, SpeechSettings};
