//! Dashboard strings

use crate::models::{Language, SpendingCategory};

#[derive(Debug)]
pub struct DashboardContent {
    pub greeting: &'static str,
    pub this_month: &'static str,
    pub income: &'static str,
    pub expenses: &'static str,
    pub savings: &'static str,
    pub categories: &'static str,
    pub recommendations: &'static str,
    pub voice_input: &'static str,
    pub ask_bot: &'static str,
    pub rating: &'static str,
    /// `{pct}` is replaced with the savings percentage
    pub savings_share: &'static str,
    pub session_entries: &'static str,
    category_names: [&'static str; 5],
    pub tips: [&'static str; 3],
}

static HINDI: DashboardContent = DashboardContent {
    greeting: "नमस्ते!",
    this_month: "इस महीने",
    income: "आय",
    expenses: "खर्च",
    savings: "बचत",
    categories: "श्रेणियां",
    recommendations: "सुझाव",
    voice_input: "आवाज़ से जोड़ें",
    ask_bot: "सवाल पूछें",
    rating: "आपकी रेटिंग",
    savings_share: "आय का {pct}%",
    session_entries: "इस सत्र में जोड़े गए खर्च",
    category_names: ["किराया", "राशन", "यात्रा", "मोबाइल", "खाना"],
    tips: [
        "दैनिक खर्च ट्रैक करने से ₹500 महीना बचा सकते हैं",
        "SIP में ₹100 महीना जमा करना शुरू करें",
        "बिजली का बिल कम करने के लिए LED बल्ब का इस्तेमाल करें",
    ],
};

static ENGLISH: DashboardContent = DashboardContent {
    greeting: "Hello!",
    this_month: "This Month",
    income: "Income",
    expenses: "Expenses",
    savings: "Savings",
    categories: "Categories",
    recommendations: "Recommendations",
    voice_input: "Voice Input",
    ask_bot: "Ask Assistant",
    rating: "Your Rating",
    savings_share: "{pct}% of income",
    session_entries: "Expenses added this session",
    category_names: ["Rent", "Groceries", "Transport", "Mobile", "Food"],
    tips: [
        "Track daily expenses to save ₹500 per month",
        "Start investing ₹100 monthly in SIP",
        "Use LED bulbs to reduce electricity bills",
    ],
};

impl DashboardContent {
    pub fn for_language(language: Language) -> &'static DashboardContent {
        match language {
            Language::Hindi => &HINDI,
            Language::English => &ENGLISH,
        }
    }

    pub fn category_name(&self, category: SpendingCategory) -> &'static str {
        match category {
            SpendingCategory::Rent => self.category_names[0],
            SpendingCategory::Groceries => self.category_names[1],
            SpendingCategory::Transport => self.category_names[2],
            SpendingCategory::Mobile => self.category_names[3],
            SpendingCategory::Food => self.category_names[4],
        }
    }

    pub fn savings_share_text(&self, pct: u32) -> String {
        self.savings_share.replace("{pct}", &pct.to_string())
    }
}
