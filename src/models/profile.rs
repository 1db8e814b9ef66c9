//! Session user profile
//!
//! Built when login succeeds and kept in memory for the rest of the session.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::income::IncomeBracket;
use super::language::Language;
use crate::error::{PaisaError, PaisaResult};

/// Number of digits in an Indian mobile number
pub const PHONE_DIGITS: usize = 10;

/// A 10-digit mobile number (without the +91 prefix)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Validate and wrap a phone number
    pub fn parse(s: &str) -> PaisaResult<Self> {
        let s = s.trim();
        if s.chars().count() != PHONE_DIGITS {
            return Err(PaisaError::Validation(format!(
                "Mobile number must be {} digits",
                PHONE_DIGITS
            )));
        }
        if !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(PaisaError::Validation(
                "Mobile number may only contain digits".into(),
            ));
        }
        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number with all but the last four digits hidden, for logs
    pub fn masked(&self) -> String {
        let visible = &self.0[PHONE_DIGITS - 4..];
        format!("{}{}", "*".repeat(PHONE_DIGITS - 4), visible)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+91 {}", self.0)
    }
}

/// Who is logged in and how the app should talk to them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub phone: PhoneNumber,
    pub language: Language,
    pub income: IncomeBracket,
}

impl UserProfile {
    pub fn new(phone: PhoneNumber, language: Language, income: IncomeBracket) -> Self {
        Self {
            phone,
            language,
            income,
        }
    }
}
