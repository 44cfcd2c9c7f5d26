//! Scout: lexical code usage search
//!
//! Scans a directory tree for declarations and usages of an identifier across
//! JavaScript/TypeScript, Python, PHP, Java, Go, C/C++ and C# sources.
//!
//! ```no_run
//! use scout::{SearchRequest, search};
//! use std::path::PathBuf;
//!
//! # async fn run() -> Result<(), scout::ToolError> {
//! let request = SearchRequest {
//!     root_path: PathBuf::from("src"),
//!     term: "getUserById".to_string(),
//!     file_types: vec![".js".to_string(), ".ts".to_string()],
//!     include_declarations: true,
//!     include_usages: true,
//!     context_lines: 2,
//!     max_results: 50,
//!     reference_file: None,
//! };
//! let result = search(&request).await?;
//! println!("{} matches in {} files", result.total_matches, result.total_files);
//! # Ok(())
//! # }
//! ```

pub use scout_core::config::{self, Config, LoggingConfig, SearchDefaults};
pub use scout_core::error::{ScoutError, ScoutResult};
pub use scout_core::tools::{Tool, ToolCall, ToolError, ToolRegistry, ToolResult, ToolSchema};
pub use scout_tools::tools::file_ops::code_usage::{
    CodeUsageTool, EXCLUDED_DIRS, FileResult, FsReader, MatchKind, SearchRequest, SearchResult,
    SourceReader, SummaryRequest, UsageMatch, UsageSummarizer, collect_files, search,
    search_with_reader,
};
pub use scout_tools::{get_configured_tools, get_default_tools};
