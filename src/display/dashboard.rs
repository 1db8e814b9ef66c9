//! Dashboard display formatting
//!
//! Formats the derived monthly summary as tables.

use tabled::{builder::Builder, settings::Style};

use crate::locale::DashboardContent;
use crate::models::Language;
use crate::services::DashboardSummary;

/// Format the dashboard summary in the given language
pub fn format_dashboard(summary: &DashboardSummary, language: Language) -> String {
    let t = DashboardContent::for_language(language);
    let mut output = String::new();

    output.push_str(&format!("{} {} ({})\n\n", t.greeting, t.this_month, summary.bracket.label()));

    let mut totals = Builder::default();
    totals.push_record([t.income.to_string(), summary.income.to_string(), String::new()]);
    totals.push_record([t.expenses.to_string(), summary.expenses.to_string(), String::new()]);
    totals.push_record([
        t.savings.to_string(),
        summary.savings.to_string(),
        t.savings_share_text(summary.savings_percent),
    ]);
    output.push_str(&totals.build().with(Style::rounded()).to_string());
    output.push_str("\n\n");

    let mut categories = Builder::default();
    categories.push_record([t.categories.to_string(), String::new(), "%".to_string()]);
    for spend in &summary.categories {
        categories.push_record([
            format!("{} {}", spend.category.icon(), t.category_name(spend.category)),
            spend.amount.to_string(),
            spend.percent.to_string(),
        ]);
    }
    output.push_str(&categories.build().with(Style::rounded()).to_string());
    output.push_str("\n\n");

    output.push_str(&format!("{}: {}\n\n", t.rating, summary.rating_stars()));

    output.push_str(&format!("{}:\n", t.recommendations));
    for tip in t.tips {
        output.push_str(&format!("  • {}\n", tip));
    }

    output
}
