//! Display formatting for terminal output
//!
//! Plain-text renderings of dashboard summaries, parsed transcripts and
//! assistant answers for the non-interactive commands.

pub mod chat;
pub mod dashboard;
pub mod expense;

pub use chat::{format_answer, format_faq_list};
pub use dashboard::format_dashboard;
pub use expense::format_parsed_expense;
