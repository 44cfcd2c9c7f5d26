//! Tool trait implementation for code usage search

use super::params;
use super::report::render_report;
use super::search::search_with_reader;
use super::summary::SummaryRequest;
use super::types::{SearchRequest, SearchResult};
use super::CodeUsageTool;
use async_trait::async_trait;
use scout_core::tools::base::{Tool, ToolError};
use scout_core::tools::types::{ToolCall, ToolResult, ToolSchema};
use std::time::Duration;
use tracing::{instrument, warn};

pub const TOOL_NAME: &str = "search_code_usage";

#[async_trait]
impl Tool for CodeUsageTool {
    fn name(&self) -> &str {
        TOOL_NAME
    }

    fn description(&self) -> &str {
        "Search a directory tree for declarations and usages of an identifier.

Features:
- Language-aware rules for JavaScript/TypeScript (incl. JSX/TSX), Python, PHP, Java, Go, C/C++ and C#
- Each occurrence is classified as 'declaration' or 'usage'
- Surrounding context lines for every match
- A global result cap shared evenly between files

Automatically skips:
- node_modules, .git, dist, build, .next and coverage directories
- Binary and unreadable files

The term is matched literally; regex characters in it are escaped."
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new(
            self.name(),
            self.description(),
            params::get_tool_parameters(self.defaults()),
        )
    }

    #[instrument(skip(self, call), fields(call_id = %call.id, term = call.get_string("term").as_deref().unwrap_or("<missing>")))]
    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
        let request = self.parse_request(call)?;
        let result = search_with_reader(&request, self.reader.as_ref()).await?;

        let mut output = render_report(&request, &result);
        if let Some(analysis) = self.summarize(&request, &result).await {
            output.push_str("\n\nAnalysis:\n");
            output.push_str(&analysis);
        }

        let search_result = serde_json::to_value(&result)?;
        let mut tool_result = ToolResult::success(&call.id, self.name(), output)
            .with_metadata("term", request.term.clone())
            .with_metadata("root_path", request.root_path.display().to_string())
            .with_metadata("total_files", result.total_files)
            .with_metadata("total_matches", result.total_matches)
            .with_metadata("search_result", search_result);
        if let Some(reference) = &request.reference_file {
            tool_result = tool_result.with_metadata("reference_file", reference.clone());
        }

        Ok(tool_result)
    }

    fn validate(&self, call: &ToolCall) -> Result<(), ToolError> {
        params::validate_arguments(call)
    }

    fn max_execution_duration(&self) -> Option<Duration> {
        Some(Duration::from_secs(120))
    }

    fn is_read_only(&self) -> bool {
        true
    }
}

impl CodeUsageTool {
    /// Ask the attached summarizer for an analysis, if any files were searched
    async fn summarize(&self, request: &SearchRequest, result: &SearchResult) -> Option<String> {
        let summarizer = self.summarizer.as_ref()?;
        if result.total_files == 0 {
            return None;
        }

        let summary_request = SummaryRequest::new(request, result);
        match summarizer.summarize(&summary_request).await {
            Ok(analysis) => Some(analysis),
            Err(e) => {
                warn!(error = %e, "Summarizer failed, returning results without analysis");
                None
            }
        }
    }
}
