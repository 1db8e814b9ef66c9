//! Display language
//!
//! Every screen renders from a static content table chosen by the user's
//! language. The language also picks the speech locale.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PaisaError;

/// Languages the app ships content for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Hindi,
    English,
}

impl Language {
    /// All languages in selector order
    pub const ALL: [Language; 2] = [Language::Hindi, Language::English];

    /// Stable lowercase tag ("hindi", "english")
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Hindi => "hindi",
            Self::English => "english",
        }
    }

    /// BCP 47 locale handed to speech recognition and synthesis
    pub fn speech_locale(&self) -> &'static str {
        match self {
            Self::Hindi => "hi-IN",
            Self::English => "en-IN",
        }
    }

    /// The language's name written in that language
    pub fn native_name(&self) -> &'static str {
        match self {
            Self::Hindi => "हिंदी",
            Self::English => "English",
        }
    }

    /// The other language, for two-way toggles
    pub fn toggled(&self) -> Self {
        match self {
            Self::Hindi => Self::English,
            Self::English => Self::Hindi,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for Language {
    type Err = PaisaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hindi" | "hi" | "hi-in" | "हिंदी" => Ok(Self::Hindi),
            "english" | "en" | "en-in" => Ok(Self::English),
            other => Err(PaisaError::Validation(format!(
                "Unknown language '{}'. Use 'hindi' or 'english'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_hindi() {
        assert_eq!(Language::default(), Language::Hindi);
    }

    #[test]
    fn test_parse() {
        assert_eq!("english".parse::<Language>().unwrap(), Language::English);
        assert_eq!("HI".parse::<Language>().unwrap(), Language::Hindi);
        assert!("marathi".parse::<Language>().is_err());
    }

    #[test]
    fn test_speech_locale() {
        assert_eq!(Language::Hindi.speech_locale(), "hi-IN");
        assert_eq!(Language::English.speech_locale(), "en-IN");
    }

    #[test]
    fn test_serde_tag() {
        let json = serde_json::to_string(&Language::English).unwrap();
        assert_eq!(json, "\"english\"");
    }
}
