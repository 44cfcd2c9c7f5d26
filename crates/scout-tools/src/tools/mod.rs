//! Scout tools, organized by category
//!
//! - `file_ops`: read-only analysis of source trees (code usage search)

pub mod file_ops;

pub use file_ops::CodeUsageTool;

use scout_core::config::SearchDefaults;
use scout_core::tools::Tool;
use std::sync::Arc;

/// Get all default tools
pub fn get_default_tools() -> Vec<Arc<dyn Tool>> {
    vec![Arc::new(CodeUsageTool::new())]
}

/// Get all default tools configured with the given search defaults
pub fn get_configured_tools(defaults: &SearchDefaults) -> Vec<Arc<dyn Tool>> {
    vec![Arc::new(CodeUsageTool::new().with_defaults(defaults.clone()))]
}
