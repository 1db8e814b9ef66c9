//! Static per-language content tables
//!
//! Each screen reads its strings from one table selected by the profile's
//! language. Tables are plain `'static` data so screens can borrow them for
//! the whole session.

pub mod chat;
pub mod dashboard;
pub mod login;
pub mod voice;

pub use chat::ChatContent;
pub use dashboard::DashboardContent;
pub use login::LoginContent;
pub use voice::VoiceContent;

/// Shown when speech recognition fails mid-session
pub const MIC_ERROR: &str = "Could not access microphone. Please try again.";

/// Shown when no speech recognizer is configured
pub const RECOGNITION_UNSUPPORTED: &str = "Speech recognition is not supported on this system.";

/// Shown when no speech synthesizer is configured
pub const SYNTHESIS_UNSUPPORTED: &str = "Text-to-speech is not supported on this system.";
