//! Dashboard service
//!
//! Derives every dashboard figure from the income bracket alone. Expenses are
//! a fixed share of income and are split across categories by fixed
//! percentages; nothing the user enters changes these numbers.

use serde::Serialize;

use crate::models::{IncomeBracket, Rupees, SpendingCategory};

/// Share of income shown as monthly expenses, in percent
pub const EXPENSE_SHARE_PERCENT: u32 = 75;

/// Star rating shown on the dashboard
pub const MOCK_RATING: u8 = 4;

/// Number of stars in the rating display
pub const MAX_RATING: u8 = 5;

/// One row of the category breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySpend {
    pub category: SpendingCategory,
    pub percent: u32,
    pub amount: Rupees,
}

/// Everything the dashboard displays for a bracket
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub bracket: IncomeBracket,
    pub income: Rupees,
    pub expenses: Rupees,
    pub savings: Rupees,
    /// Savings as a whole percentage of income
    pub savings_percent: u32,
    /// Expenses as a percentage of income, for the progress gauge
    pub expense_ratio: f64,
    pub categories: Vec<CategorySpend>,
    pub rating: u8,
}

impl DashboardSummary {
    /// Derive the dashboard figures for an income bracket
    pub fn for_bracket(bracket: IncomeBracket) -> Self {
        let income = bracket.representative_income();
        let expenses = income.percent(EXPENSE_SHARE_PERCENT);
        let savings = income - expenses;

        let categories = SpendingCategory::ALL
            .iter()
            .map(|&category| CategorySpend {
                category,
                percent: category.percent(),
                amount: expenses.percent(category.percent()),
            })
            .collect();

        let expense_ratio = if income.is_zero() {
            0.0
        } else {
            expenses.value() as f64 / income.value() as f64 * 100.0
        };

        Self {
            bracket,
            income,
            expenses,
            savings,
            savings_percent: savings.share_of(income),
            expense_ratio,
            categories,
            rating: MOCK_RATING,
        }
    }

    /// Sum of the category percentages
    pub fn total_percent(&self) -> u32 {
        self.categories.iter().map(|c| c.percent).sum()
    }

    /// The rating as filled and empty stars
    pub fn rating_stars(&self) -> String {
        stars(self.rating)
    }
}

fn stars(rating: u8) -> String {
    let filled = rating.min(MAX_RATING) as usize;
    format!(
        "{}{}",
        "★".repeat(filled),
        "☆".repeat(MAX_RATING as usize - filled)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowest_bracket_figures() {
        let summary = DashboardSummary::for_bracket(IncomeBracket::TenToFifteen);
        assert_eq!(summary.income, Rupees::new(12000));
        assert_eq!(summary.expenses, Rupees::new(9000));
        assert_eq!(summary.savings, Rupees::new(3000));
        assert_eq!(summary.savings_percent, 25);
        assert!((summary.expense_ratio - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_category_split_rounds_down() {
        let summary = DashboardSummary::for_bracket(IncomeBracket::FifteenToTwenty);
        assert_eq!(summary.expenses, Rupees::new(13125));

        let amounts: Vec<i64> = summary.categories.iter().map(|c| c.amount.value()).collect();
        assert_eq!(amounts, vec![5250, 3281, 1968, 1312, 1312]);
    }

    #[test]
    fn test_percentages_sum_to_hundred_for_every_bracket() {
        for bracket in IncomeBracket::ALL {
            let summary = DashboardSummary::for_bracket(bracket);
            assert_eq!(summary.total_percent(), 100);
            assert_eq!(summary.income, summary.expenses + summary.savings);

            let split: Rupees = summary.categories.iter().map(|c| c.amount).sum();
            assert!(split <= summary.expenses);
        }
    }

    #[test]
    fn test_top_bracket() {
        let summary = DashboardSummary::for_bracket(IncomeBracket::TwentyPlus);
        assert_eq!(summary.expenses, Rupees::new(16500));
        assert_eq!(summary.savings, Rupees::new(5500));
        assert_eq!(summary.rating, MOCK_RATING);
        assert_eq!(summary.rating_stars(), "★★★★☆");
    }

    #[test]
    fn test_stars_are_capped() {
        assert_eq!(stars(9), "★★★★★");
        assert_eq!(stars(0), "☆☆☆☆☆");
    }
}
