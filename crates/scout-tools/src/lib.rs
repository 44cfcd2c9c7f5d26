//! Scout tools
//!
//! Tool implementations exposed by Scout. The crate currently ships the code
//! usage search tool; see [`tools::file_ops::code_usage`].

pub mod tools;

pub use tools::file_ops::code_usage::{
    CodeUsageTool, FileResult, MatchKind, SearchRequest, SearchResult, SummaryRequest,
    UsageMatch, UsageSummarizer,
};
pub use tools::{get_configured_tools, get_default_tools};
