//! Assistant display formatting

use crate::services::ChatBot;

/// Format the quick-pick questions as a numbered list
pub fn format_faq_list(bot: &ChatBot) -> String {
    bot.quick_questions()
        .iter()
        .enumerate()
        .map(|(i, q)| format!("{}. {}\n", i + 1, q))
        .collect()
}

/// Format a question and the assistant's reply
pub fn format_answer(question: &str, answer: &str) -> String {
    format!("> {}\n\n{}\n", question.trim(), answer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IncomeBracket, Language};

    #[test]
    fn test_faq_list_is_numbered() {
        let bot = ChatBot::new(Language::English, IncomeBracket::TenToFifteen);
        let output = format_faq_list(&bot);
        assert_eq!(output.lines().count(), 5);
        assert!(output.starts_with("1. How can I save money?"));
    }
}
