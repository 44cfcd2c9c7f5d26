//! Configuration management commands

use crate::console::CliConsole;
use colored::*;
use scout_core::config::{Config, load_from_file, save_to_file};
use scout_core::error::{ScoutError, ScoutResult};
use std::path::Path;

/// Show current configuration
pub async fn show(config_file: &str) -> ScoutResult<()> {
    let console = CliConsole::new(true);

    console.print_header("Configuration");

    if !Path::new(config_file).exists() {
        console.warn(&format!("Configuration file not found: {config_file}"));
        console.info("Using default configuration");
        print_config(&console, &Config::default());
        return Ok(());
    }

    let config = load_from_file(Path::new(config_file))?;
    console.success(&format!("Loaded configuration from: {config_file}"));

    print_config(&console, &config);
    Ok(())
}

/// Validate configuration
pub async fn validate(config_file: &str) -> ScoutResult<()> {
    let console = CliConsole::new(true);

    console.print_header("Configuration Validation");

    if !Path::new(config_file).exists() {
        return Err(ScoutError::config(format!(
            "Configuration file not found: {config_file}"
        )));
    }

    console.info(&format!("Validating configuration file: {config_file}"));

    let config = load_from_file(Path::new(config_file))?;
    console.success("Configuration file loaded successfully");

    if let Err(e) = config.validate() {
        console.error(&format!("Configuration validation failed: {e}"));
        return Err(e);
    }

    console.success("Configuration is valid");
    console.print_separator();
    console.info(&format!("File types: {}", config.search.file_types.len()));
    console.info(&format!("Max results: {}", config.search.max_results));
    Ok(())
}

/// Initialize a new configuration file
pub async fn init(config_file: &str, force: bool) -> ScoutResult<()> {
    let console = CliConsole::new(true);

    console.print_header("Configuration Initialization");

    if Path::new(config_file).exists() && !force {
        console.error(&format!("Configuration file already exists: {config_file}"));
        console.info("Use --force to overwrite");
        return Err(ScoutError::config("Configuration file already exists"));
    }

    save_to_file(&Config::default(), Path::new(config_file))?;

    console.success(&format!("Created configuration file: {config_file}"));
    console.info("Edit the file to change default extensions, limits and logging");

    Ok(())
}

/// Print configuration details
fn print_config(console: &CliConsole, config: &Config) {
    let search = &config.search;

    console.info(&format!(
        "File Types: {}",
        search.file_types.join(" ").cyan()
    ));
    console.info(&format!(
        "Declarations: {}",
        enabled(search.include_declarations)
    ));
    console.info(&format!("Usages: {}", enabled(search.include_usages)));
    console.info(&format!(
        "Context Lines: {}",
        search.context_lines.to_string().yellow()
    ));
    console.info(&format!(
        "Max Results: {}",
        search.max_results.to_string().yellow()
    ));

    console.print_separator();
    console.print_header("Logging");
    console.info(&format!("Level: {}", config.logging.level.magenta()));
    console.info(&format!("Format: {:?}", config.logging.format));
}

fn enabled(flag: bool) -> ColoredString {
    if flag {
        "✓ Enabled".green()
    } else {
        "✗ Disabled".red()
    }
}
