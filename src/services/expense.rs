//! Expense service
//!
//! Confirmed expenses live in memory for the current session only. The book
//! validates each entry before accepting it.

use crate::error::{PaisaError, PaisaResult};
use crate::models::{Expense, ExpenseCategory, Rupees};

/// In-memory list of the session's confirmed expenses
#[derive(Debug, Clone, Default)]
pub struct ExpenseBook {
    expenses: Vec<Expense>,
}

impl ExpenseBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a confirmed expense
    pub fn add(
        &mut self,
        amount: Rupees,
        category: ExpenseCategory,
        description: &str,
    ) -> PaisaResult<&Expense> {
        let expense = Expense::new(amount, category, description.trim());

        // Validate
        expense
            .validate()
            .map_err(|e| PaisaError::Validation(e.to_string()))?;

        tracing::info!(
            id = %expense.id,
            amount = expense.amount.value(),
            category = %expense.category,
            "Expense recorded"
        );

        self.expenses.push(expense);
        self.expenses
            .last()
            .ok_or_else(|| PaisaError::Validation("Expense was not recorded".into()))
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Expense> {
        self.expenses.iter()
    }

    /// Sum of every recorded amount
    pub fn total(&self) -> Rupees {
        self.expenses.iter().map(|e| e.amount).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_expense() {
        let mut book = ExpenseBook::new();
        let expense = book
            .add(Rupees::new(200), ExpenseCategory::Groceries, "  sabzi  ")
            .unwrap();
        assert_eq!(expense.description, "sabzi");
        assert_eq!(book.len(), 1);
        assert_eq!(book.total(), Rupees::new(200));
    }

    #[test]
    fn test_non_positive_amount_rejected() {
        let mut book = ExpenseBook::new();
        let err = book
            .add(Rupees::zero(), ExpenseCategory::Other, "nothing")
            .unwrap_err();
        assert!(err.is_validation());
        assert!(book.is_empty());
    }

    #[test]
    fn test_total_across_entries() {
        let mut book = ExpenseBook::new();
        book.add(Rupees::new(50), ExpenseCategory::Transport, "auto")
            .unwrap();
        book.add(Rupees::new(500), ExpenseCategory::Medical, "medicine")
            .unwrap();
        assert_eq!(book.total(), Rupees::new(550));
        assert_eq!(book.iter().count(), 2);
    }
}
