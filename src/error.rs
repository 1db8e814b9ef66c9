//! Custom error types for Paisa Tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Paisa Tracker operations
#[derive(Error, Debug)]
pub enum PaisaError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// The platform has no speech capability of the requested kind
    #[error("{0} is not supported on this system")]
    SpeechUnsupported(&'static str),

    /// A speech session failed
    #[error("Speech error: {0}")]
    Speech(String),

    /// A transcript pattern failed to compile
    #[error("Pattern error: {0}")]
    Pattern(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl PaisaError {
    /// Create an "unsupported" error for speech recognition
    pub fn recognition_unsupported() -> Self {
        Self::SpeechUnsupported("Speech recognition")
    }

    /// Create an "unsupported" error for speech synthesis
    pub fn synthesis_unsupported() -> Self {
        Self::SpeechUnsupported("Speech synthesis")
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error means the speech capability is missing
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::SpeechUnsupported(_))
    }
}

impl From<std::io::Error> for PaisaError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PaisaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<regex::Error> for PaisaError {
    fn from(err: regex::Error) -> Self {
        Self::Pattern(err.to_string())
    }
}

/// Result type alias for Paisa Tracker operations
pub type PaisaResult<T> = Result<T, PaisaError>;
