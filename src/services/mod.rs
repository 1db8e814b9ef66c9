//! Service layer for Paisa Tracker
//!
//! The service layer holds the app's behavior: the mock login flow, the
//! derived dashboard figures, transcript parsing, the scripted assistant and
//! the speech capability seam.

pub mod chatbot;
pub mod dashboard;
pub mod expense;
pub mod expense_parser;
pub mod login;
pub mod speech;

pub use chatbot::{ChatBot, Conversation};
pub use dashboard::{CategorySpend, DashboardSummary};
pub use expense::ExpenseBook;
pub use expense_parser::{ExpenseParser, ParsedExpense};
pub use login::{LoginFlow, LoginStep};
pub use speech::{RecognitionEvent, SpeechRecognizer, SpeechSynthesizer};
