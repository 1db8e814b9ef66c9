//! Init and config commands

use crate::config::paths::PaisaPaths;
use crate::config::settings::Settings;
use crate::error::PaisaResult;

/// Write the current settings to disk
pub fn handle_init_command(paths: &PaisaPaths, settings: &Settings) -> PaisaResult<()> {
    let existed = paths.is_initialized();
    settings.save(paths)?;
    tracing::info!(path = %paths.settings_file().display(), "Settings written");

    if existed {
        println!("Settings already existed and were rewritten.");
    } else {
        println!("Initialized Paisa Tracker at: {}", paths.base_dir().display());
    }
    println!("Settings file: {}", paths.settings_file().display());
    println!();
    println!("Edit 'speech.recognizer' and 'speech.synthesizer' to enable voice.");
    Ok(())
}

/// Print paths and settings
pub fn handle_config_command(paths: &PaisaPaths, settings: &Settings) -> PaisaResult<()> {
    let command_or_none = |spec: Option<&crate::config::CommandSpec>| {
        spec.map(|s| format!("{} {}", s.program, s.args.join(" ")).trim().to_string())
            .unwrap_or_else(|| "(not configured)".to_string())
    };

    println!("Paisa Tracker Configuration");
    println!("===========================");
    println!("Base directory: {}", paths.base_dir().display());
    println!("Settings file:  {}", paths.settings_file().display());
    println!("Log file:       {}", paths.log_file().display());
    println!("Initialized:    {}", paths.is_initialized());
    println!();
    println!("Settings:");
    println!("  Default language:    {}", settings.default_language);
    println!("  Default income:      {}", settings.default_income);
    println!("  Processing delay:    {} ms", settings.processing_delay_ms);
    println!("  Response delay:      {} ms", settings.response_delay_ms);
    println!("  Notification time:   {} s", settings.notification_secs);
    println!(
        "  Speech recognizer:   {}",
        command_or_none(settings.speech.recognizer.as_ref())
    );
    println!(
        "  Speech synthesizer:  {}",
        command_or_none(settings.speech.synthesizer.as_ref())
    );
    println!("  Speech rate:         {}", settings.speech.rate);
    println!("  Log filter:          {}", settings.log_filter);
    Ok(())
}
