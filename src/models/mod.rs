//! Core data models for Paisa Tracker
//!
//! Everything here is transient session state: the logged-in profile,
//! voice-entered expenses and chat messages. Nothing is persisted.

pub mod expense;
pub mod ids;
pub mod income;
pub mod language;
pub mod message;
pub mod money;
pub mod profile;
pub mod spending;

pub use expense::{Expense, ExpenseCategory, ExpenseSource};
pub use ids::{ExpenseId, MessageId};
pub use income::IncomeBracket;
pub use language::Language;
pub use message::{Author, Message};
pub use money::Rupees;
pub use profile::{PhoneNumber, UserProfile, PHONE_DIGITS};
pub use spending::SpendingCategory;
