//! Assistant CLI commands
//!
//! One-shot questions to the scripted assistant, without the typing delay.

use clap::Args;

use crate::config::settings::Settings;
use crate::display::{format_answer, format_faq_list};
use crate::error::{PaisaError, PaisaResult};
use crate::models::{IncomeBracket, Language};
use crate::services::ChatBot;

/// Arguments for `paisa ask`
#[derive(Args, Debug)]
pub struct AskArgs {
    /// The question to ask
    pub question: String,

    /// Income bracket quoted in the savings answer
    #[arg(short, long)]
    pub income: Option<IncomeBracket>,

    /// Answer language (hindi or english)
    #[arg(short, long)]
    pub lang: Option<Language>,
}

/// Arguments for `paisa faq`
#[derive(Args, Debug)]
pub struct FaqArgs {
    /// Question language (hindi or english)
    #[arg(short, long)]
    pub lang: Option<Language>,
}

/// Handle the ask command
pub fn handle_ask_command(settings: &Settings, args: AskArgs) -> PaisaResult<()> {
    if args.question.trim().is_empty() {
        return Err(PaisaError::Validation("Question cannot be empty".into()));
    }

    let bot = ChatBot::new(
        args.lang.unwrap_or(settings.default_language),
        args.income.unwrap_or(settings.default_income),
    );
    let answer = bot.respond(&args.question);

    print!("{}", format_answer(&args.question, &answer));
    Ok(())
}

/// Handle the faq command
pub fn handle_faq_command(settings: &Settings, args: FaqArgs) -> PaisaResult<()> {
    let bot = ChatBot::new(
        args.lang.unwrap_or(settings.default_language),
        settings.default_income,
    );
    print!("{}", format_faq_list(&bot));
    Ok(())
}
