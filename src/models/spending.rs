//! Dashboard spending categories
//!
//! The dashboard splits derived monthly expenses across these categories by
//! fixed percentages. They are separate from the voice-entry categories.

use serde::{Deserialize, Serialize};

/// A slice of the dashboard's derived monthly expenses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpendingCategory {
    Rent,
    Groceries,
    Transport,
    Mobile,
    Food,
}

impl SpendingCategory {
    /// All categories in display order
    pub const ALL: [SpendingCategory; 5] = [
        SpendingCategory::Rent,
        SpendingCategory::Groceries,
        SpendingCategory::Transport,
        SpendingCategory::Mobile,
        SpendingCategory::Food,
    ];

    /// Share of monthly expenses, in percent
    pub const fn percent(&self) -> u32 {
        match self {
            Self::Rent => 40,
            Self::Groceries => 25,
            Self::Transport => 15,
            Self::Mobile => 10,
            Self::Food => 10,
        }
    }

    /// Short glyph shown next to the category in the terminal
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Rent => "⌂",
            Self::Groceries => "◍",
            Self::Transport => "➜",
            Self::Mobile => "☏",
            Self::Food => "♨",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentages_sum_to_hundred() {
        let total: u32 = SpendingCategory::ALL.iter().map(|c| c.percent()).sum();
        assert_eq!(total, 100);
    }
}
