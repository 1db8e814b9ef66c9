//! Assistant screen strings and the canned FAQ table

use crate::models::Language;

/// Placeholder in FAQ answers replaced with the income bracket's lower bound
pub const INCOME_PLACEHOLDER: &str = "{income}";

/// A quick-pick question and its canned answer
#[derive(Debug)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug)]
pub struct ChatContent {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub placeholder: &'static str,
    pub typing: &'static str,
    pub listening: &'static str,
    pub speak: &'static str,
    pub greeting: &'static str,
    pub fallback: &'static str,
    /// In table order; the first entry is the savings answer
    pub faqs: [Faq; 5],
}

static HINDI: ChatContent = ChatContent {
    title: "वित्तीय सहायक",
    subtitle: "पैसे के बारे में पूछें",
    placeholder: "अपना सवाल यहाँ लिखें...",
    typing: "टाइप कर रहे हैं...",
    listening: "सुन रहे हैं...",
    speak: "बोलें",
    greeting: "नमस्ते! मैं आपका वित्तीय सहायक हूं। पैसे के बारे में कोई भी सवाल पूछ सकते हैं।",
    fallback: "माफ करें, मैं इस सवाल का जवाब नहीं दे पा रहा। कृपया दूसरा सवाल पूछें या ऊपर दिए गए सुझावों में से कोई चुनें।",
    faqs: [
        Faq {
            question: "मैं कैसे पैसे बचा सकता हूं?",
            answer: "पैसे बचाने के लिए: 1) महीने की शुरुआत में ही बचत अलग कर दें 2) छोटे-छोटे खर्चों को ट्रैक करें 3) जरूरत और चाहत में फर्क करें 4) हर दिन का हिसाब रखें। आपकी आय ₹{income} है, तो कम से कम ₹500-1000 महीना बचाने की कोशिश करें।",
        },
        Faq {
            question: "SIP क्या है?",
            answer: "SIP मतलब Systematic Investment Plan है। यह म्यूचुअल फंड में हर महीने एक निश्चित रकम जमा करने का तरीका है। आप ₹100 से भी शुरुआत कर सकते हैं। यह आपके पैसे को बढ़ाने का सुरक्षित तरीका है।",
        },
        Faq {
            question: "इमरजेंसी फंड कैसे बनाऊं?",
            answer: "इमरजेंसी फंड के लिए: 1) 3-6 महीने के खर्च के बराबर पैसा अलग रखें 2) यह पैसा बैंक के सेविंग अकाउंट या FD में रखें 3) हर महीने थोड़ा-थोड़ा जमा करते रहें 4) इसे सिर्फ जरूरी स्थिति में ही इस्तेमाल करें।",
        },
        Faq {
            question: "बीमा क्यों जरूरी है?",
            answer: "बीमा आपको और आपके परिवार को वित्तीय सुरक्षा देता है। अगर कोई दुर्घटना हो या बीमारी आए तो बीमा आपके इलाज का खर्च उठाता है। हेल्थ इंश्योरेंस और टर्म लाइफ इंश्योरेंस जरूर लें।",
        },
        Faq {
            question: "गोल्ड में निवेश कैसे करें?",
            answer: "गोल्ड में निवेश के तरीके: 1) डिजिटल गोल्ड - PhonePe, Paytm से खरीद सकते हैं 2) गोल्ड ETF 3) गोल्ड म्यूचुअल फंड। भौतिक सोना खरीदने से बचें क्योंकि इसमें making charges ज्यादा लगते हैं।",
        },
    ],
};

static ENGLISH: ChatContent = ChatContent {
    title: "Financial Assistant",
    subtitle: "Ask about money matters",
    placeholder: "Type your question here...",
    typing: "Typing...",
    listening: "Listening...",
    speak: "Speak",
    greeting: "Hello! I'm your financial assistant. Ask me anything about money matters.",
    fallback: "Sorry, I couldn't understand that question. Please try asking differently or choose from the suggested questions above.",
    faqs: [
        Faq {
            question: "How can I save money?",
            answer: "To save money: 1) Set aside savings at the beginning of each month 2) Track small expenses 3) Differentiate between needs and wants 4) Maintain daily accounts. With your income of ₹{income}, try to save at least ₹500-1000 per month.",
        },
        Faq {
            question: "What is SIP?",
            answer: "SIP means Systematic Investment Plan. It's a way to invest a fixed amount every month in mutual funds. You can start with as little as ₹100. It's a safe way to grow your money.",
        },
        Faq {
            question: "How to build emergency fund?",
            answer: "For emergency fund: 1) Keep aside money equal to 3-6 months of expenses 2) Keep this money in bank savings account or FD 3) Keep adding little by little every month 4) Use it only in genuine emergencies.",
        },
        Faq {
            question: "Why is insurance important?",
            answer: "Insurance provides financial security to you and your family. If there's an accident or illness, insurance covers your treatment costs. Health insurance and term life insurance are must-have.",
        },
        Faq {
            question: "How to invest in gold?",
            answer: "Ways to invest in gold: 1) Digital gold - buy from PhonePe, Paytm 2) Gold ETF 3) Gold mutual funds. Avoid buying physical gold as it has high making charges.",
        },
    ],
};

impl ChatContent {
    pub fn for_language(language: Language) -> &'static ChatContent {
        match language {
            Language::Hindi => &HINDI,
            Language::English => &ENGLISH,
        }
    }
}
