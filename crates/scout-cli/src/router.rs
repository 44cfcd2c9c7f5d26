//! Command routing logic for CLI

use crate::args::{Cli, Commands, ConfigAction};
use crate::commands;
use scout_core::config::Config;
use scout_core::error::ScoutResult;

/// Route CLI commands to their respective handlers
pub async fn route(cli: &Cli, config: &Config) -> ScoutResult<()> {
    match &cli.command {
        Commands::Search(args) => commands::search::execute(args, config).await,
        Commands::Tools => commands::tools::show_tools(config).await,
        Commands::Schema { tool } => commands::schema::show_schema(config, tool.as_deref()).await,
        Commands::Config { action } => route_config(action, &cli.config_file).await,
    }
}

async fn route_config(action: &ConfigAction, config_file: &str) -> ScoutResult<()> {
    match action {
        ConfigAction::Show => commands::config::show(config_file).await,
        ConfigAction::Validate => commands::config::validate(config_file).await,
        ConfigAction::Init { force } => commands::config::init(config_file, *force).await,
    }
}
