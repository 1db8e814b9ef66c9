use anyhow::Result;
use clap::{Parser, Subcommand};

use paisa::cli::{
    handle_ask_command, handle_config_command, handle_dashboard_command, handle_faq_command,
    handle_init_command, handle_parse_command, AskArgs, DashboardArgs, FaqArgs, ParseArgs,
};
use paisa::config::{paths::PaisaPaths, settings::Settings};
use paisa::logging::init_logging;

#[derive(Parser)]
#[command(
    name = "paisa",
    version,
    about = "Voice-first expense tracking in Hindi and English",
    long_about = "Paisa Tracker helps households on a fixed monthly income see where \
                  their money goes. Log in with a phone number, check the dashboard \
                  for your income bracket, add expenses by speaking, and ask the \
                  assistant about saving and investing."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui,

    /// Show the dashboard figures for an income bracket
    Dashboard(DashboardArgs),

    /// Parse an expense from a transcript
    Parse(ParseArgs),

    /// Ask the finance assistant a question
    Ask(AskArgs),

    /// List the assistant's quick questions
    Faq(FaqArgs),

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = PaisaPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    if let Err(e) = init_logging(&paths, &settings) {
        eprintln!("Warning: logging disabled: {}", e);
    }
    tracing::debug!(base_dir = %paths.base_dir().display(), "Starting");

    match cli.command {
        None | Some(Commands::Tui) => paisa::tui::run_tui(&settings)?,
        Some(Commands::Dashboard(args)) => handle_dashboard_command(&settings, args)?,
        Some(Commands::Parse(args)) => handle_parse_command(&settings, args)?,
        Some(Commands::Ask(args)) => handle_ask_command(&settings, args)?,
        Some(Commands::Faq(args)) => handle_faq_command(&settings, args)?,
        Some(Commands::Init) => handle_init_command(&paths, &settings)?,
        Some(Commands::Config) => handle_config_command(&paths, &settings)?,
    }

    Ok(())
}
