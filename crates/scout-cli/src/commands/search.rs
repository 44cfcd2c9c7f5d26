//! Search command implementation

use crate::args::SearchArgs;
use crate::console::{CliConsole, format};
use scout_core::config::Config;
use scout_core::error::{ScoutError, ScoutResult};
use scout_core::tools::ToolRegistry;
use scout_core::tools::types::ToolCall;
use scout_tools::get_configured_tools;
use serde_json::{Map, Value, json};
use tracing::debug;

/// Run a code usage search and print the report
pub async fn execute(args: &SearchArgs, config: &Config) -> ScoutResult<()> {
    let console = CliConsole::new(true);
    let registry = ToolRegistry::with_tools(get_configured_tools(&config.search));
    let call = build_call(args);
    let tool = registry.require(&call.name)?;

    debug!(arguments = ?call.arguments, "Executing search");
    let result = registry.execute(&call).await?;

    if args.json {
        let search_result = result.metadata.get("search_result").cloned().ok_or_else(|| {
            ScoutError::tool(tool.name(), "search result missing from tool metadata")
        })?;
        console.print_json(&search_result);
        return Ok(());
    }

    println!("{}", format::report(&tool.render_result(&result)));
    Ok(())
}

/// Translate command-line flags into a tool call
///
/// Flags that were not given are left out so the tool's configured defaults
/// apply.
pub fn build_call(args: &SearchArgs) -> ToolCall {
    let mut arguments = Map::new();
    arguments.insert(
        "root_path".to_string(),
        json!(args.root.to_string_lossy()),
    );
    arguments.insert("term".to_string(), json!(args.term));

    if !args.file_types.is_empty() {
        arguments.insert("file_types".to_string(), json!(args.file_types));
    }
    if args.no_declarations {
        arguments.insert("include_declarations".to_string(), json!(false));
    }
    if args.no_usages {
        arguments.insert("include_usages".to_string(), json!(false));
    }
    if let Some(context_lines) = args.context_lines {
        arguments.insert("context_lines".to_string(), json!(context_lines));
    }
    if let Some(max_results) = args.max_results {
        arguments.insert("max_results".to_string(), json!(max_results));
    }
    if let Some(reference_file) = &args.reference_file {
        arguments.insert("reference_file".to_string(), json!(reference_file));
    }

    ToolCall::from_json("cli", "search_code_usage", Value::Object(arguments))
}
