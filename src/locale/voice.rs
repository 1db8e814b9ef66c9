//! Voice expense screen strings

use crate::models::{ExpenseCategory, Language};

#[derive(Debug)]
pub struct VoiceContent {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub start_recording: &'static str,
    pub stop_recording: &'static str,
    pub processing: &'static str,
    pub you_said: &'static str,
    pub amount: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub confirm: &'static str,
    pub cancel: &'static str,
    pub examples_title: &'static str,
    pub try_saying: &'static str,
    pub examples: [&'static str; 3],
    category_names: [&'static str; 6],
    pub added: &'static str,
    pub invalid_amount: &'static str,
}

static HINDI: VoiceContent = VoiceContent {
    title: "आवाज़ से खर्च जोड़ें",
    subtitle: "बोलकर अपना खर्च दर्ज करें",
    start_recording: "रिकॉर्डिंग शुरू करें",
    stop_recording: "रिकॉर्डिंग बंद करें",
    processing: "समझ रहे हैं...",
    you_said: "आपने कहा:",
    amount: "रकम",
    category: "श्रेणी",
    description: "विवरण",
    confirm: "पुष्टि करें",
    cancel: "रद्द करें",
    examples_title: "उदाहरण",
    try_saying: "ऐसे बोलें:",
    examples: [
        "आज 200 रुपये सब्जी में खर्च किया",
        "50 रुपये ऑटो का किराया दिया",
        "500 रुपये दवाई में लगे",
    ],
    category_names: ["राशन/सब्जी", "यात्रा", "खाना", "दवाई", "बिल", "अन्य"],
    added: "खर्च जोड़ा गया!",
    invalid_amount: "कृपया सही रकम डालें",
};

static ENGLISH: VoiceContent = VoiceContent {
    title: "Voice Expense Input",
    subtitle: "Speak to add your expense",
    start_recording: "Start Recording",
    stop_recording: "Stop Recording",
    processing: "Processing...",
    you_said: "You said:",
    amount: "Amount",
    category: "Category",
    description: "Description",
    confirm: "Confirm",
    cancel: "Cancel",
    examples_title: "Examples",
    try_saying: "Try saying:",
    examples: [
        "Spent 200 rupees on vegetables today",
        "Paid 50 rupees for auto fare",
        "500 rupees for medicine",
    ],
    category_names: ["Groceries", "Transport", "Food", "Medical", "Bills", "Other"],
    added: "Expense Added!",
    invalid_amount: "Amount must be a positive number",
};

impl VoiceContent {
    pub fn for_language(language: Language) -> &'static VoiceContent {
        match language {
            Language::Hindi => &HINDI,
            Language::English => &ENGLISH,
        }
    }

    pub fn category_name(&self, category: ExpenseCategory) -> &'static str {
        let idx = ExpenseCategory::ALL
            .iter()
            .position(|c| *c == category)
            .unwrap_or(ExpenseCategory::ALL.len() - 1);
        self.category_names[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_names_follow_category_order() {
        let hi = VoiceContent::for_language(Language::Hindi);
        assert_eq!(hi.category_name(ExpenseCategory::Groceries), "राशन/सब्जी");
        assert_eq!(hi.category_name(ExpenseCategory::Other), "अन्य");
        let en = VoiceContent::for_language(Language::English);
        assert_eq!(en.category_name(ExpenseCategory::Medical), "Medical");
    }
}
