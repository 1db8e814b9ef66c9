//! User settings for Paisa Tracker
//!
//! Manages login defaults, artificial delays, notification timing and the
//! external commands used for speech.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::paths::PaisaPaths;
use crate::error::PaisaError;
use crate::models::{IncomeBracket, Language};

/// An external program plus its arguments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }
}

/// Speech capability settings
///
/// The recognizer command must print a transcript on stdout and exit. The
/// synthesizer command receives the text as its last argument. Both see
/// `PAISA_SPEECH_LOCALE` in their environment, the synthesizer also
/// `PAISA_SPEECH_RATE`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recognizer: Option<CommandSpec>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synthesizer: Option<CommandSpec>,

    /// Speaking rate passed to the synthesizer (1.0 is normal)
    #[serde(default = "default_speech_rate")]
    pub rate: f32,
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            recognizer: None,
            synthesizer: None,
            rate: default_speech_rate(),
        }
    }
}

/// User settings for Paisa Tracker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Language preselected on the login screen
    #[serde(default)]
    pub default_language: Language,

    /// Income bracket preselected on the login screen
    #[serde(default)]
    pub default_income: IncomeBracket,

    /// Artificial "processing" delay after a voice transcript arrives
    #[serde(default = "default_delay_ms")]
    pub processing_delay_ms: u64,

    /// Artificial "typing" delay before the assistant answers
    #[serde(default = "default_delay_ms")]
    pub response_delay_ms: u64,

    /// How long notifications stay on screen
    #[serde(default = "default_notification_secs")]
    pub notification_secs: u64,

    /// Speech recognition and synthesis
    #[serde(default)]
    pub speech: SpeechSettings,

    /// tracing filter directive used when `PAISA_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_delay_ms() -> u64 {
    1500
}

/// Upper bound for the artificial delays
pub const MAX_DELAY_MS: u64 = 60_000;

fn default_notification_secs() -> u64 {
    3
}

fn default_speech_rate() -> f32 {
    0.8
}

fn default_log_filter() -> String {
    "paisa=info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_language: Language::default(),
            default_income: IncomeBracket::default(),
            processing_delay_ms: default_delay_ms(),
            response_delay_ms: default_delay_ms(),
            notification_secs: default_notification_secs(),
            speech: SpeechSettings::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    /// Wait before a transcript is parsed, capped at `MAX_DELAY_MS`
    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.processing_delay_ms.min(MAX_DELAY_MS))
    }

    /// Wait before the assistant replies, capped at `MAX_DELAY_MS`
    pub fn response_delay(&self) -> Duration {
        Duration::from_millis(self.response_delay_ms.min(MAX_DELAY_MS))
    }

    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &PaisaPaths) -> Result<Self, PaisaError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| PaisaError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                PaisaError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PaisaPaths) -> Result<(), PaisaError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| PaisaError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| PaisaError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
