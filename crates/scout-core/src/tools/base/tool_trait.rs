//! Core Tool trait definition

use super::error::ToolError;
use crate::tools::types::{ToolCall, ToolResult, ToolSchema};
use async_trait::async_trait;
use std::time::{Duration, Instant};

/// Base trait for all tools
///
/// A tool is a named operation with a JSON schema for its inputs. Callers
/// build a [`ToolCall`] and receive a [`ToolResult`]; the transport that
/// carries them is not the tool's concern.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Get the tool's unique name (e.g., "search_code_usage")
    fn name(&self) -> &str;

    /// Get the tool's description for callers and LLM prompts
    fn description(&self) -> &str;

    /// Get the tool's JSON schema for input parameters
    fn schema(&self) -> ToolSchema;

    /// Execute the tool with the given arguments
    ///
    /// # Errors
    ///
    /// Returns `ToolError` if arguments are invalid or execution fails.
    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError>;

    /// Validate the tool call arguments
    ///
    /// Called before `execute()` to verify arguments are valid.
    /// Default implementation accepts all arguments.
    fn validate(&self, call: &ToolCall) -> Result<(), ToolError> {
        let _ = call;
        Ok(())
    }

    /// Get the maximum execution time as Duration (default: 5 minutes)
    fn max_execution_duration(&self) -> Option<Duration> {
        Some(Duration::from_secs(300))
    }

    /// Get the maximum execution time in seconds
    fn max_execution_time(&self) -> Option<u64> {
        self.max_execution_duration().map(|d| d.as_secs())
    }

    /// Whether this tool only reads data without side effects
    fn is_read_only(&self) -> bool {
        false
    }

    /// Render the tool result for display to the user
    ///
    /// Default shows output for success, error message for failures.
    fn render_result(&self, result: &ToolResult) -> String {
        if result.success {
            result.output.clone().unwrap_or_default()
        } else {
            format!("Error: {}", result.error.clone().unwrap_or_default())
        }
    }

    /// Execute the tool with timing and error handling
    ///
    /// Wraps `execute()` with validation and timing measurement, converting
    /// errors into a failed `ToolResult`.
    async fn execute_with_timing(&self, call: &ToolCall) -> ToolResult {
        let start_time = Instant::now();

        if let Err(err) = self.validate(call) {
            return ToolResult::error(&call.id, self.name(), err.to_string())
                .with_execution_time(start_time.elapsed().as_millis() as u64);
        }

        match self.execute(call).await {
            Ok(mut result) => {
                result.execution_time_ms = Some(start_time.elapsed().as_millis() as u64);
                result
            }
            Err(err) => ToolResult::error(&call.id, self.name(), err.to_string())
                .with_execution_time(start_time.elapsed().as_millis() as u64),
        }
    }
}
