//! Parsed transcript display formatting

use tabled::{builder::Builder, settings::Style};

use crate::locale::VoiceContent;
use crate::models::Language;
use crate::services::ParsedExpense;

/// Format what the parser understood from a transcript
pub fn format_parsed_expense(parsed: &ParsedExpense, language: Language) -> String {
    let t = VoiceContent::for_language(language);

    let amount = parsed
        .amount
        .map(|a| a.to_string())
        .unwrap_or_else(|| "-".to_string());

    let mut builder = Builder::default();
    builder.push_record([t.amount.to_string(), amount]);
    builder.push_record([
        t.category.to_string(),
        format!("{} ({})", t.category_name(parsed.category), parsed.category.key()),
    ]);
    builder.push_record([t.description.to_string(), parsed.description.clone()]);

    format!(
        "{}\n{}\n",
        t.you_said,
        builder.build().with(Style::rounded())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, Rupees};

    #[test]
    fn test_format_with_amount() {
        let parsed = ParsedExpense {
            amount: Some(Rupees::new(200)),
            category: ExpenseCategory::Groceries,
            description: "200 rupees sabzi".into(),
        };
        let output = format_parsed_expense(&parsed, Language::English);
        assert!(output.contains("₹200"));
        assert!(output.contains("Groceries (groceries)"));
    }

    #[test]
    fn test_format_without_amount() {
        let parsed = ParsedExpense {
            amount: None,
            category: ExpenseCategory::Other,
            description: "kuch nahi".into(),
        };
        let output = format_parsed_expense(&parsed, Language::Hindi);
        assert!(output.contains("रकम"));
        assert!(output.contains("अन्य"));
    }
}
