//! Transcript parsing for voice expense entry
//!
//! Pulls an amount and a category out of a spoken sentence such as
//! "Spent 200 rupees on vegetables today" or "50 रुपये ऑटो का किराया दिया".
//!
//! Amounts come from an ordered list of patterns: the earliest pattern whose
//! captured number lies strictly between 0 and [`MAX_AMOUNT`] wins. Categories
//! come from keyword lists checked in a fixed order.

use regex::Regex;
use serde::Serialize;

use crate::error::PaisaResult;
use crate::models::{ExpenseCategory, Rupees};

/// Exclusive upper bound for an extracted amount
pub const MAX_AMOUNT: i64 = 100_000;

/// Amount patterns, most specific first. Group 1 is the number.
const AMOUNT_PATTERNS: [&str; 15] = [
    // currency word after / before the number
    r"(?i)([0-9]+)\s*(?:rupaye|rupees|रुपये|रुपए|rupaiya)",
    r"(?i)(?:rupaye|rupees|रुपये|रुपए|rupaiya)\s*([0-9]+)",
    r"(?i)([0-9]+)\s*(?:rs|₹|taka|टका)",
    r"(?i)(?:rs|₹|taka|टका)\s*([0-9]+)",
    // spending context
    r"(?i)(?:kharch|खर्च|spend|spent|expenditure|expense|cost|price|diya|दिया|किया|kiya)\s*.*?([0-9]+)",
    r"(?i)([0-9]+)\s*(?:mein|में|for|ke liye|के लिए|ka|का|ki|की)",
    r"(?i)(?:paisa|पैसा|money|amount|राशि|रकम)\s*.*?([0-9]+)",
    // category words
    r"(?i)(?:sabzi|सब्जी|vegetables|grocery|groceries|किराना|kirana)\s*.*?([0-9]+)",
    r"(?i)(?:petrol|diesel|fuel|पेट्रोल|डीजल|ईंधन)\s*.*?([0-9]+)",
    r"(?i)(?:travel|यात्रा|ticket|टिकट|bus|बस|auto|ऑटो)\s*.*?([0-9]+)",
    r"(?i)(?:food|खाना|meal|भोजन|lunch|dinner|breakfast)\s*.*?([0-9]+)",
    r"(?i)(?:medicine|दवा|medical|doctor|डॉक्टर|hospital|अस्पताल)\s*.*?([0-9]+)",
    // buying and paying
    r"(?i)(?:bought|buy|kharida|खरीदा|liya|लिया|purchase)\s*.*?([0-9]+)",
    r"(?i)(?:paid|pay|payment|दिया|भुगतान)\s*.*?([0-9]+)",
    // any number at all
    r"([0-9]+)",
];

/// Keywords per category, checked in [`ExpenseCategory::ALL`] order
fn keywords(category: ExpenseCategory) -> &'static [&'static str] {
    match category {
        ExpenseCategory::Groceries => &[
            "sabzi", "सब्जी", "grocery", "groceries", "किराना", "kirana", "vegetables", "fruits",
            "milk", "दूध", "ration", "राशन",
        ],
        ExpenseCategory::Transport => &[
            "petrol", "diesel", "fuel", "पेट्रोल", "डीजल", "bus", "बस", "auto", "ऑटो", "taxi",
            "टैक्सी", "travel", "यात्रा", "ticket", "टिकट",
        ],
        ExpenseCategory::Food => &[
            "khana", "खाना", "food", "meal", "भोजन", "lunch", "dinner", "breakfast",
            "restaurant", "रेस्तराँ", "tea", "चाय", "coffee", "कॉफी",
        ],
        ExpenseCategory::Medical => &[
            "medicine", "दवा", "medical", "doctor", "डॉक्टर", "hospital", "अस्पताल",
        ],
        ExpenseCategory::Bills => &[
            "mobile", "मोबाइल", "phone", "फोन", "recharge", "रिचार्ज", "data", "डेटा",
            "internet", "इंटरनेट", "rent", "किराया", "house", "घर", "room", "कमरा",
            "electricity", "बिजली", "water", "पानी",
        ],
        ExpenseCategory::Other => &[
            "clothes", "कपड़े", "gift", "उपहार", "other", "अन्य", "miscellaneous",
        ],
    }
}

/// What the parser understood from a transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedExpense {
    pub amount: Option<Rupees>,
    pub category: ExpenseCategory,
    pub description: String,
}

/// Compiled transcript parser
#[derive(Debug, Clone)]
pub struct ExpenseParser {
    patterns: Vec<Regex>,
}

impl ExpenseParser {
    /// Compile the amount patterns
    pub fn new() -> PaisaResult<Self> {
        let patterns = AMOUNT_PATTERNS
            .iter()
            .map(|p| Regex::new(p))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Extract the spoken amount, if any
    pub fn extract_amount(&self, text: &str) -> Option<Rupees> {
        self.patterns.iter().find_map(|pattern| {
            pattern
                .captures(text)
                .and_then(|caps| caps.get(1))
                .and_then(|m| m.as_str().parse::<i64>().ok())
                .filter(|amount| *amount > 0 && *amount < MAX_AMOUNT)
                .map(Rupees::new)
        })
    }

    /// Pick a category by keyword, defaulting to `Other`
    pub fn categorize(&self, text: &str) -> ExpenseCategory {
        let lower = text.to_lowercase();
        ExpenseCategory::ALL
            .into_iter()
            .find(|&category| keywords(category).iter().any(|k| lower.contains(k)))
            .unwrap_or(ExpenseCategory::Other)
    }

    /// Run both extractions; the description is the transcript itself
    pub fn parse(&self, transcript: &str) -> ParsedExpense {
        let parsed = ParsedExpense {
            amount: self.extract_amount(transcript),
            category: self.categorize(transcript),
            description: transcript.to_string(),
        };
        tracing::debug!(
            amount = ?parsed.amount.map(|a| a.value()),
            category = %parsed.category,
            "Parsed transcript"
        );
        parsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> ExpenseParser {
        ExpenseParser::new().unwrap()
    }

    #[test]
    fn test_rupees_after_number() {
        let p = parser();
        assert_eq!(p.extract_amount("200 rupees"), Some(Rupees::new(200)));
        assert_eq!(
            p.extract_amount("Spent 200 rupees on vegetables today"),
            Some(Rupees::new(200))
        );
    }

    #[test]
    fn test_hindi_examples() {
        let p = parser();

        let parsed = p.parse("आज 200 रुपये सब्जी में खर्च किया");
        assert_eq!(parsed.amount, Some(Rupees::new(200)));
        assert_eq!(parsed.category, ExpenseCategory::Groceries);

        let parsed = p.parse("50 रुपये ऑटो का किराया दिया");
        assert_eq!(parsed.amount, Some(Rupees::new(50)));
        assert_eq!(parsed.category, ExpenseCategory::Transport);

        let parsed = p.parse("500 रुपये दवाई में लगे");
        assert_eq!(parsed.amount, Some(Rupees::new(500)));
        assert_eq!(parsed.category, ExpenseCategory::Medical);
    }

    #[test]
    fn test_english_examples() {
        let p = parser();

        let parsed = p.parse("Paid 50 rupees for auto fare");
        assert_eq!(parsed.amount, Some(Rupees::new(50)));
        assert_eq!(parsed.category, ExpenseCategory::Transport);

        let parsed = p.parse("500 rupees for medicine");
        assert_eq!(parsed.amount, Some(Rupees::new(500)));
        assert_eq!(parsed.category, ExpenseCategory::Medical);
        assert_eq!(parsed.description, "500 rupees for medicine");
    }

    #[test]
    fn test_earlier_pattern_wins() {
        let p = parser();
        // the currency-word pattern beats the bare-number fallback
        assert_eq!(
            p.extract_amount("bus number 42 cost 30 rupees"),
            Some(Rupees::new(30))
        );
        assert_eq!(p.extract_amount("Rs 75 chai"), Some(Rupees::new(75)));
        assert_eq!(p.extract_amount("₹120 for lunch"), Some(Rupees::new(120)));
    }

    #[test]
    fn test_out_of_range_amount_falls_through() {
        let p = parser();
        assert_eq!(p.extract_amount("150000 rupees"), None);
        assert_eq!(p.extract_amount("0 rupees"), None);
        // first pattern is out of range, a later one still matches
        assert_eq!(
            p.extract_amount("200000 rupees kharch 300"),
            Some(Rupees::new(300))
        );
    }

    #[test]
    fn test_no_number() {
        let p = parser();
        assert_eq!(p.extract_amount("bought some vegetables"), None);
        assert_eq!(p.extract_amount(""), None);
    }

    #[test]
    fn test_categorize_is_case_insensitive_and_ordered() {
        let p = parser();
        assert_eq!(p.categorize("MILK and bread"), ExpenseCategory::Groceries);
        // groceries is checked before food
        assert_eq!(p.categorize("milk tea"), ExpenseCategory::Groceries);
        assert_eq!(p.categorize("mobile recharge"), ExpenseCategory::Bills);
        assert_eq!(p.categorize("bijli ka bill"), ExpenseCategory::Other);
        assert_eq!(p.categorize("new clothes"), ExpenseCategory::Other);
    }
}
