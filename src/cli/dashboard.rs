//! Dashboard CLI command
//!
//! Prints the figures the dashboard screen shows for a bracket.

use clap::Args;

use crate::config::settings::Settings;
use crate::display::format_dashboard;
use crate::error::PaisaResult;
use crate::models::{IncomeBracket, Language};
use crate::services::DashboardSummary;

/// Arguments for `paisa dashboard`
#[derive(Args, Debug)]
pub struct DashboardArgs {
    /// Income bracket (10000-15000, 15000-20000 or 20000+)
    #[arg(short, long)]
    pub income: Option<IncomeBracket>,

    /// Output language (hindi or english)
    #[arg(short, long)]
    pub lang: Option<Language>,

    /// Print JSON instead of tables
    #[arg(long)]
    pub json: bool,
}

/// Handle the dashboard command
pub fn handle_dashboard_command(settings: &Settings, args: DashboardArgs) -> PaisaResult<()> {
    let bracket = args.income.unwrap_or(settings.default_income);
    let language = args.lang.unwrap_or(settings.default_language);

    let summary = DashboardSummary::for_bracket(bracket);
    tracing::debug!(bracket = %bracket, "Dashboard summary requested");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", format_dashboard(&summary, language));
    }

    Ok(())
}
