//! Voice-entered expenses
//!
//! Expenses are appended to an in-memory list for the session. They are never
//! read back into the dashboard figures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::ExpenseId;
use super::money::Rupees;
use crate::error::PaisaError;

/// Category assigned to a voice-entered expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Groceries,
    Transport,
    Food,
    Medical,
    Bills,
    Other,
}

impl ExpenseCategory {
    /// All categories in matching priority order
    pub const ALL: [ExpenseCategory; 6] = [
        ExpenseCategory::Groceries,
        ExpenseCategory::Transport,
        ExpenseCategory::Food,
        ExpenseCategory::Medical,
        ExpenseCategory::Bills,
        ExpenseCategory::Other,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Groceries => "groceries",
            Self::Transport => "transport",
            Self::Food => "food",
            Self::Medical => "medical",
            Self::Bills => "bills",
            Self::Other => "other",
        }
    }

    /// Next category in selector order, wrapping around
    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|c| c == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous category in selector order, wrapping around
    pub fn prev(&self) -> Self {
        let idx = Self::ALL.iter().position(|c| c == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for ExpenseCategory {
    type Err = PaisaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.key() == s)
            .ok_or_else(|| PaisaError::Validation(format!("Unknown category '{}'", s)))
    }
}

/// How an expense was entered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseSource {
    #[default]
    Voice,
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NonPositiveAmount,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount => write!(f, "Expense amount must be greater than zero"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

/// A confirmed expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub amount: Rupees,
    pub category: ExpenseCategory,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "type")]
    pub source: ExpenseSource,
}

impl Expense {
    /// Create a new voice expense stamped with the current time
    pub fn new(amount: Rupees, category: ExpenseCategory, description: impl Into<String>) -> Self {
        Self {
            id: ExpenseId::new(),
            amount,
            category,
            description: description.into(),
            created_at: Utc::now(),
            source: ExpenseSource::Voice,
        }
    }

    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_expense() {
        let expense = Expense::new(Rupees::new(200), ExpenseCategory::Groceries, "sabzi");
        assert_eq!(expense.amount, Rupees::new(200));
        assert_eq!(expense.source, ExpenseSource::Voice);
        assert!(expense.validate().is_ok());
    }

    #[test]
    fn test_zero_amount_rejected() {
        let expense = Expense::new(Rupees::zero(), ExpenseCategory::Other, "");
        assert_eq!(
            expense.validate(),
            Err(ExpenseValidationError::NonPositiveAmount)
        );
    }

    #[test]
    fn test_category_cycle() {
        assert_eq!(ExpenseCategory::Other.next(), ExpenseCategory::Groceries);
        assert_eq!(ExpenseCategory::Groceries.prev(), ExpenseCategory::Other);
        assert_eq!("Bills".parse::<ExpenseCategory>().unwrap(), ExpenseCategory::Bills);
    }

    #[test]
    fn test_serialized_source_tag() {
        let expense = Expense::new(Rupees::new(50), ExpenseCategory::Transport, "auto");
        let json = serde_json::to_value(&expense).unwrap();
        assert_eq!(json["type"], "voice");
        assert_eq!(json["category"], "transport");
    }
}
