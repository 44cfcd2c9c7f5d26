//! Request and result types for code usage search

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Classification of a lexical occurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    /// The term follows a declaration-introducing keyword
    Declaration,
    /// Any other reference (call, bare reference, member access, key, tag)
    Usage,
}

impl MatchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Declaration => "declaration",
            Self::Usage => "usage",
        }
    }
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully validated search request
///
/// Built once per call and never mutated while the search runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Directory to scan (already resolved against the working directory)
    pub root_path: PathBuf,
    /// Identifier to look for, taken literally
    pub term: String,
    /// Lower-cased extensions including the leading dot
    pub file_types: Vec<String>,
    pub include_declarations: bool,
    pub include_usages: bool,
    /// Lines of context on each side of a match
    pub context_lines: usize,
    /// Global cap on matches across all files
    pub max_results: usize,
    /// Optional file handed to the summarizer for context
    pub reference_file: Option<String>,
}

impl SearchRequest {
    /// Even share of the global cap given to each collected file, at least one
    pub fn per_file_quota(&self, file_count: usize) -> usize {
        if file_count == 0 {
            return self.max_results;
        }
        (self.max_results / file_count).max(1)
    }
}

/// One occurrence of the term
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageMatch {
    /// 1-based line number
    #[serde(rename = "line")]
    pub line_number: usize,
    #[serde(rename = "type")]
    pub kind: MatchKind,
    /// Matched line plus the surrounding context window, newline-joined
    pub context: String,
    /// Literal text matched by the pattern
    #[serde(rename = "match")]
    pub matched_text: String,
    /// 0-based character offset of the match within its line
    #[serde(rename = "position")]
    pub column: usize,
}

/// Matches found in a single file, top to bottom
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileResult {
    #[serde(rename = "file")]
    pub path: PathBuf,
    pub matches: Vec<UsageMatch>,
    pub total_matches: usize,
}

impl FileResult {
    pub fn new(path: PathBuf, matches: Vec<UsageMatch>) -> Self {
        let total_matches = matches.len();
        Self {
            path,
            matches,
            total_matches,
        }
    }
}

/// Final aggregate of a search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Number of files collected for scanning
    pub total_files: usize,
    /// Sum of per-file match counts, never above the request's cap
    pub total_matches: usize,
    /// Files with at least one match, in collection order
    pub results: Vec<FileResult>,
}

impl SearchResult {
    pub fn empty(total_files: usize) -> Self {
        Self {
            total_files,
            total_matches: 0,
            results: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
