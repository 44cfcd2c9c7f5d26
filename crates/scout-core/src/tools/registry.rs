//! Tool registry for managing available tools

use crate::tools::base::{Tool, ToolError};
use crate::tools::types::{ToolCall, ToolResult};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::time::timeout;
use tracing::warn;

/// Registry for managing available tools
///
/// Tools are kept in name order so listings are stable.
pub struct ToolRegistry {
    tools: BTreeMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Create a new tool registry
    pub fn new() -> Self {
        Self {
            tools: BTreeMap::new(),
        }
    }

    /// Create a registry pre-populated with the given tools
    pub fn with_tools(tools: Vec<Arc<dyn Tool>>) -> Self {
        let mut registry = Self::new();
        for tool in tools {
            registry.register(tool);
        }
        registry
    }

    /// Register a tool
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        let name = tool.name().to_string();
        self.tools.insert(name, tool);
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.get(name)
    }

    /// Get a tool by name, failing with `ToolError::NotFound`
    pub fn require(&self, name: &str) -> Result<&Arc<dyn Tool>, ToolError> {
        self.get(name)
            .ok_or_else(|| ToolError::NotFound(name.to_string()))
    }

    /// Get all tool names
    pub fn tool_names(&self) -> Vec<String> {
        self.tools.keys().cloned().collect()
    }

    /// Check if a tool is registered
    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Get all tools
    pub fn all_tools(&self) -> Vec<Arc<dyn Tool>> {
        self.tools.values().cloned().collect()
    }

    /// Validate and run a call against the tool it names
    ///
    /// Execution is bounded by the tool's `max_execution_duration`.
    pub async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
        let tool = self.require(&call.name)?;
        tool.validate(call)?;

        match tool.max_execution_duration() {
            Some(limit) => match timeout(limit, tool.execute(call)).await {
                Ok(result) => result,
                Err(_) => {
                    warn!(tool = %call.name, limit_secs = limit.as_secs(), "Tool execution timed out");
                    Err(ToolError::Timeout)
                }
            },
            None => tool.execute(call).await,
        }
    }

    /// Number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
