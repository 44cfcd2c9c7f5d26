//! Boundary to the natural-language summarization step

use super::report::render_listing;
use super::types::{SearchRequest, SearchResult};
use async_trait::async_trait;
use scout_core::tools::base::ToolError;
use serde::{Deserialize, Serialize};

/// Everything a summarizer receives about a finished search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRequest {
    pub term: String,
    pub root_path: String,
    pub total_files: usize,
    pub total_matches: usize,
    /// Per-file listing, as rendered in the report
    pub listing: String,
    pub reference_file: Option<String>,
}

impl SummaryRequest {
    pub fn new(request: &SearchRequest, result: &SearchResult) -> Self {
        Self {
            term: request.term.clone(),
            root_path: request.root_path.display().to_string(),
            total_files: result.total_files,
            total_matches: result.total_matches,
            listing: render_listing(&result.results),
            reference_file: request.reference_file.clone(),
        }
    }

    /// Prompt text asking for a prose analysis of the results
    pub fn prompt(&self) -> String {
        let mut prompt = String::from(
            "Analyze the following code usage search results and provide a concise summary.\n\n",
        );
        prompt.push_str(&format!("Search term: {}\n", self.term));
        prompt.push_str(&format!("Root path: {}\n", self.root_path));
        prompt.push_str(&format!("Total files searched: {}\n", self.total_files));
        prompt.push_str(&format!("Total matches found: {}\n", self.total_matches));
        if let Some(reference) = &self.reference_file {
            prompt.push_str(&format!("Reference file: {}\n", reference));
        }
        prompt.push_str(&format!("\nResults:{}\n", self.listing));
        prompt.push_str(
            "\nPlease describe:\n\
             1. Where the term is used\n\
             2. Kinds of usage (declarations, calls, references)\n\
             3. The most common usage patterns\n\
             4. Potential issues or recommendations",
        );
        prompt
    }
}

/// Produces a prose explanation of a search result
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsageSummarizer: Send + Sync {
    async fn summarize(&self, request: &SummaryRequest) -> Result<String, ToolError>;
}
