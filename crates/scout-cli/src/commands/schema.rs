//! Schema command implementation

use crate::console::CliConsole;
use scout_core::config::Config;
use scout_core::error::ScoutResult;
use scout_core::tools::ToolRegistry;
use scout_tools::tools::get_configured_tools;

/// Print the JSON schema of one tool, or of all tools
pub async fn show_schema(config: &Config, tool_name: Option<&str>) -> ScoutResult<()> {
    let console = CliConsole::new(true);
    let registry = ToolRegistry::with_tools(get_configured_tools(&config.search));

    let tools = match tool_name {
        Some(name) => vec![registry.require(name)?.clone()],
        None => registry.all_tools(),
    };

    let schemas = tools
        .iter()
        .map(|tool| serde_json::to_value(tool.schema()))
        .collect::<Result<Vec<_>, _>>()?;

    console.print_json(&serde_json::Value::Array(schemas));
    Ok(())
}
