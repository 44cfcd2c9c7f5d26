//! Tools command implementation

use crate::console::CliConsole;
use scout_core::config::Config;
use scout_core::error::ScoutResult;
use scout_core::tools::ToolRegistry;
use scout_tools::tools::get_configured_tools;

/// Show available tools and their descriptions
pub async fn show_tools(config: &Config) -> ScoutResult<()> {
    let console = CliConsole::new(true);
    let registry = ToolRegistry::with_tools(get_configured_tools(&config.search));

    console.print_header("Available Tools");
    console.print_table_header(&["Tool Name", "Description"]);

    for tool in registry.all_tools() {
        let summary = tool.description().lines().next().unwrap_or_default();
        console.print_table_row(&[tool.name(), summary]);
    }

    console.info("");
    console.info(&format!("Total tools available: {}", registry.len()));
    console.info("Run `scout schema` to see the input parameters of each tool.");

    Ok(())
}
