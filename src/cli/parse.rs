//! Transcript parsing CLI command
//!
//! Runs the voice-entry parser on a typed transcript.

use clap::Args;

use crate::config::settings::Settings;
use crate::display::format_parsed_expense;
use crate::error::PaisaResult;
use crate::models::Language;
use crate::services::ExpenseParser;

/// Arguments for `paisa parse`
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// What was said, e.g. "Spent 200 rupees on vegetables"
    pub transcript: String,

    /// Output language (hindi or english)
    #[arg(short, long)]
    pub lang: Option<Language>,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Handle the parse command
pub fn handle_parse_command(settings: &Settings, args: ParseArgs) -> PaisaResult<()> {
    let language = args.lang.unwrap_or(settings.default_language);
    let parser = ExpenseParser::new()?;
    let parsed = parser.parse(args.transcript.trim());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&parsed)?);
    } else {
        print!("{}", format_parsed_expense(&parsed, language));
    }

    Ok(())
}
