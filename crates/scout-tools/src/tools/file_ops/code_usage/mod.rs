//! Code usage search tool
//!
//! Finds declarations and usages of an identifier across a source tree:
//! - `collector`: directory walk with an extension allow-list and fixed exclusions
//! - `patterns`: per-language declaration and usage rules
//! - `scanner`: line-by-line matching with context windows and a per-file quota
//! - `search`: aggregation under a global match cap

mod collector;
mod params;
mod patterns;
mod reader;
mod report;
mod scanner;
mod schema;
mod search;
mod summary;
mod types;

#[cfg(test)]
mod tests;

pub use collector::{EXCLUDED_DIRS, collect_files};
pub use params::{get_tool_parameters, normalize_extension, validate_arguments};
pub use patterns::{LanguageFamily, PatternRegistry, PatternRule};
pub use reader::{FsReader, SourceReader};
pub use report::render_report;
pub use scanner::{ScanOptions, context_window, scan, scan_content};
pub use schema::TOOL_NAME;
pub use search::{search, search_with_reader};
pub use summary::{SummaryRequest, UsageSummarizer};
pub use types::{FileResult, MatchKind, SearchRequest, SearchResult, UsageMatch};

use scout_core::config::SearchDefaults;
use scout_core::tools::base::FileSystemTool;
use std::path::PathBuf;
use std::sync::Arc;

/// Tool that searches a directory tree for declarations and usages of a term
pub struct CodeUsageTool {
    working_directory: PathBuf,
    defaults: SearchDefaults,
    reader: Arc<dyn SourceReader>,
    summarizer: Option<Arc<dyn UsageSummarizer>>,
}

impl CodeUsageTool {
    /// Create a new code usage tool rooted at the current directory
    pub fn new() -> Self {
        Self::with_working_directory(
            std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        )
    }

    /// Create a code usage tool with specific working directory
    pub fn with_working_directory<P: Into<PathBuf>>(working_dir: P) -> Self {
        Self {
            working_directory: working_dir.into(),
            defaults: SearchDefaults::default(),
            reader: Arc::new(FsReader),
            summarizer: None,
        }
    }

    /// Use `defaults` for inputs a call omits
    pub fn with_defaults(mut self, defaults: SearchDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Read file contents through `reader` instead of the local filesystem
    pub fn with_reader(mut self, reader: Arc<dyn SourceReader>) -> Self {
        self.reader = reader;
        self
    }

    /// Append a summarizer's analysis to every report
    pub fn with_summarizer(mut self, summarizer: Arc<dyn UsageSummarizer>) -> Self {
        self.summarizer = Some(summarizer);
        self
    }

    pub fn defaults(&self) -> &SearchDefaults {
        &self.defaults
    }
}

impl Default for CodeUsageTool {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemTool for CodeUsageTool {
    fn working_directory(&self) -> &std::path::Path {
        &self.working_directory
    }
}
