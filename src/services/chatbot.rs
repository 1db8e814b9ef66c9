//! Scripted finance assistant
//!
//! Answers come from a fixed per-language FAQ table. A question matches an
//! FAQ when it contains the first ten characters of that FAQ (both
//! lowercased). Replies are held back for an artificial "typing" delay.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::locale::chat::{ChatContent, Faq, INCOME_PLACEHOLDER};
use crate::models::{IncomeBracket, Language, Message};

/// Characters of an FAQ question that must appear in the user's question
pub const MATCH_PREFIX_CHARS: usize = 10;

/// Words that route an otherwise unmatched question to the savings answer
const SAVINGS_KEYWORDS: [&str; 2] = ["save", "बचत"];

/// Stateless responder for one language and income bracket
#[derive(Debug, Clone, Copy)]
pub struct ChatBot {
    language: Language,
    income: IncomeBracket,
}

impl ChatBot {
    pub fn new(language: Language, income: IncomeBracket) -> Self {
        Self { language, income }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    fn content(&self) -> &'static ChatContent {
        ChatContent::for_language(self.language)
    }

    pub fn greeting(&self) -> &'static str {
        self.content().greeting
    }

    pub fn fallback(&self) -> &'static str {
        self.content().fallback
    }

    /// The quick-pick questions, in table order
    pub fn quick_questions(&self) -> Vec<&'static str> {
        self.content().faqs.iter().map(|f| f.question).collect()
    }

    fn answer(&self, faq: &Faq) -> String {
        faq.answer.replace(INCOME_PLACEHOLDER, self.income.lower_bound())
    }

    /// Pick the canned reply for a question
    pub fn respond(&self, question: &str) -> String {
        let normalized = question.to_lowercase();
        let faqs = &self.content().faqs;

        for faq in faqs {
            let prefix: String = faq
                .question
                .to_lowercase()
                .chars()
                .take(MATCH_PREFIX_CHARS)
                .collect();
            if normalized.contains(&prefix) {
                return self.answer(faq);
            }
        }

        if SAVINGS_KEYWORDS.iter().any(|k| normalized.contains(k)) {
            return self.answer(&faqs[0]);
        }

        self.fallback().to_string()
    }
}

#[derive(Debug, Clone)]
struct PendingReply {
    text: String,
    due: Instant,
}

/// A chat session: the message history plus replies still "being typed"
#[derive(Debug, Clone)]
pub struct Conversation {
    bot: ChatBot,
    delay: Duration,
    messages: Vec<Message>,
    pending: VecDeque<PendingReply>,
}

impl Conversation {
    /// Start a conversation seeded with the bot's greeting
    pub fn new(bot: ChatBot, delay: Duration) -> Self {
        Self {
            bot,
            delay,
            messages: vec![Message::bot(bot.greeting())],
            pending: VecDeque::new(),
        }
    }

    pub fn bot(&self) -> &ChatBot {
        &self.bot
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Whether a reply is still waiting out its delay
    pub fn is_typing(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Post a user message and schedule the reply
    ///
    /// Blank input is ignored and returns `false`.
    pub fn send(&mut self, text: &str, now: Instant) -> bool {
        if text.trim().is_empty() {
            return false;
        }

        self.messages.push(Message::user(text));
        let reply = self.bot.respond(text);
        tracing::debug!(chars = text.chars().count(), "Question queued");
        self.pending.push_back(PendingReply {
            text: reply,
            due: now.checked_add(self.delay).unwrap_or(now),
        });
        true
    }

    /// Deliver every reply whose delay has passed; returns how many arrived
    pub fn poll(&mut self, now: Instant) -> usize {
        let mut delivered = 0;
        while self.pending.front().is_some_and(|p| p.due <= now) {
            if let Some(reply) = self.pending.pop_front() {
                self.messages.push(Message::bot(reply.text));
                delivered += 1;
            }
        }
        delivered
    }

    /// Most recent bot message, if any
    pub fn last_bot_message(&self) -> Option<&Message> {
        self.messages.iter().rev().find(|m| !m.is_user())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_faq_matches() {
        let bot = ChatBot::new(Language::English, IncomeBracket::TenToFifteen);
        let reply = bot.respond("What is SIP?");
        assert!(reply.starts_with("SIP means Systematic Investment Plan"));
    }

    #[test]
    fn test_prefix_match_is_case_insensitive() {
        let bot = ChatBot::new(Language::English, IncomeBracket::TenToFifteen);
        let reply = bot.respond("please tell me HOW TO INVEST in something");
        assert!(reply.starts_with("Ways to invest in gold"));
    }

    #[test]
    fn test_savings_answer_quotes_income() {
        let bot = ChatBot::new(Language::English, IncomeBracket::FifteenToTwenty);
        let reply = bot.respond("How can I save money?");
        assert!(reply.contains("With your income of ₹15000,"));

        let bot = ChatBot::new(Language::Hindi, IncomeBracket::TwentyPlus);
        let reply = bot.respond("मैं कैसे पैसे बचा सकता हूं?");
        assert!(reply.contains("आपकी आय ₹20000+ है"));
    }

    #[test]
    fn test_save_keyword_routes_to_first_answer() {
        let bot = ChatBot::new(Language::English, IncomeBracket::TenToFifteen);
        let reply = bot.respond("I want to save for a bike");
        assert!(reply.starts_with("To save money:"));

        let bot = ChatBot::new(Language::Hindi, IncomeBracket::TenToFifteen);
        let reply = bot.respond("बचत के तरीके बताओ");
        assert!(reply.starts_with("पैसे बचाने के लिए:"));
    }

    #[test]
    fn test_unknown_question_gets_fallback() {
        let bot = ChatBot::new(Language::English, IncomeBracket::TenToFifteen);
        assert_eq!(bot.respond("what's the weather"), bot.fallback());

        let bot = ChatBot::new(Language::Hindi, IncomeBracket::TenToFifteen);
        assert!(bot.respond("मौसम कैसा है").starts_with("माफ करें"));
    }

    #[test]
    fn test_conversation_starts_with_greeting() {
        let bot = ChatBot::new(Language::English, IncomeBracket::TenToFifteen);
        let convo = Conversation::new(bot, Duration::from_millis(1500));
        assert_eq!(convo.messages().len(), 1);
        assert!(!convo.messages()[0].is_user());
        assert!(!convo.is_typing());
    }

    #[test]
    fn test_reply_arrives_after_delay() {
        let bot = ChatBot::new(Language::English, IncomeBracket::TenToFifteen);
        let mut convo = Conversation::new(bot, Duration::from_millis(1500));
        let start = Instant::now();

        assert!(convo.send("What is SIP?", start));
        assert!(convo.is_typing());
        assert_eq!(convo.messages().len(), 2);

        assert_eq!(convo.poll(start + Duration::from_millis(1000)), 0);
        assert_eq!(convo.poll(start + Duration::from_millis(1500)), 1);
        assert!(!convo.is_typing());
        assert_eq!(convo.messages().len(), 3);
        assert!(convo
            .last_bot_message()
            .unwrap()
            .text
            .starts_with("SIP means"));
    }

    #[test]
    fn test_overflowing_delay_does_not_panic() {
        let bot = ChatBot::new(Language::English, IncomeBracket::TenToFifteen);
        let mut convo = Conversation::new(bot, Duration::MAX);
        let now = Instant::now();

        assert!(convo.send("What is SIP?", now));
        assert_eq!(convo.poll(now), 1);
    }

    #[test]
    fn test_blank_message_ignored() {
        let bot = ChatBot::new(Language::English, IncomeBracket::TenToFifteen);
        let mut convo = Conversation::new(bot, Duration::ZERO);
        assert!(!convo.send("   ", Instant::now()));
        assert_eq!(convo.messages().len(), 1);
    }

    #[test]
    fn test_replies_keep_order() {
        let bot = ChatBot::new(Language::English, IncomeBracket::TenToFifteen);
        let mut convo = Conversation::new(bot, Duration::from_millis(100));
        let start = Instant::now();

        convo.send("What is SIP?", start);
        convo.send("hello there", start + Duration::from_millis(50));
        assert_eq!(convo.poll(start + Duration::from_secs(1)), 2);

        let texts: Vec<&str> = convo.messages().iter().map(|m| m.text.as_str()).collect();
        assert!(texts[3].starts_with("SIP means"));
        assert_eq!(texts[4], convo.bot().fallback());
    }
}
