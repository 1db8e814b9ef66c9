//! Income brackets
//!
//! The bracket picked at login is the only input to every figure the
//! dashboard shows. Each bracket stands for a fixed representative income.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Rupees;
use crate::error::PaisaError;

/// Monthly income range chosen at login
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum IncomeBracket {
    #[default]
    #[serde(rename = "10000-15000")]
    TenToFifteen,
    #[serde(rename = "15000-20000")]
    FifteenToTwenty,
    #[serde(rename = "20000+")]
    TwentyPlus,
}

impl IncomeBracket {
    /// All brackets in selector order
    pub const ALL: [IncomeBracket; 3] = [
        IncomeBracket::TenToFifteen,
        IncomeBracket::FifteenToTwenty,
        IncomeBracket::TwentyPlus,
    ];

    /// Stable range tag ("10000-15000", "15000-20000", "20000+")
    pub fn tag(&self) -> &'static str {
        match self {
            Self::TenToFifteen => "10000-15000",
            Self::FifteenToTwenty => "15000-20000",
            Self::TwentyPlus => "20000+",
        }
    }

    /// Label shown in the selector
    pub fn label(&self) -> &'static str {
        match self {
            Self::TenToFifteen => "₹10,000 - 15,000",
            Self::FifteenToTwenty => "₹15,000 - 20,000",
            Self::TwentyPlus => "₹20,000+",
        }
    }

    /// Income the dashboard assumes for this bracket
    pub fn representative_income(&self) -> Rupees {
        match self {
            Self::TenToFifteen => Rupees::new(12000),
            Self::FifteenToTwenty => Rupees::new(17500),
            Self::TwentyPlus => Rupees::new(22000),
        }
    }

    /// Text before the first '-' of the tag, as quoted by the assistant
    pub fn lower_bound(&self) -> &'static str {
        let tag = self.tag();
        tag.split('-').next().unwrap_or(tag)
    }

    /// Next bracket in selector order, wrapping around
    pub fn next(&self) -> Self {
        match self {
            Self::TenToFifteen => Self::FifteenToTwenty,
            Self::FifteenToTwenty => Self::TwentyPlus,
            Self::TwentyPlus => Self::TenToFifteen,
        }
    }

    /// Previous bracket in selector order, wrapping around
    pub fn prev(&self) -> Self {
        match self {
            Self::TenToFifteen => Self::TwentyPlus,
            Self::FifteenToTwenty => Self::TenToFifteen,
            Self::TwentyPlus => Self::FifteenToTwenty,
        }
    }
}

impl fmt::Display for IncomeBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for IncomeBracket {
    type Err = PaisaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|bracket| bracket.tag() == s)
            .ok_or_else(|| {
                PaisaError::Validation(format!(
                    "Unknown income bracket '{}'. Use 10000-15000, 15000-20000 or 20000+",
                    s
                ))
            })
    }
}
