//! Default values applied to search requests that omit optional inputs

use serde::{Deserialize, Serialize};

/// Extensions searched when a request does not name any
pub const DEFAULT_FILE_TYPES: &[&str] = &[
    ".js", ".ts", ".jsx", ".tsx", ".py", ".php", ".java", ".go", ".cpp", ".c", ".cs",
];

/// Search defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchDefaults {
    /// Extensions (with leading dot) to include
    pub file_types: Vec<String>,
    /// Include declaration sites
    pub include_declarations: bool,
    /// Include usage sites
    pub include_usages: bool,
    /// Lines of context on each side of a match
    pub context_lines: usize,
    /// Global cap on returned matches
    pub max_results: usize,
}

impl Default for SearchDefaults {
    fn default() -> Self {
        Self {
            file_types: DEFAULT_FILE_TYPES.iter().map(|s| s.to_string()).collect(),
            include_declarations: true,
            include_usages: true,
            context_lines: 3,
            max_results: 50,
        }
    }
}

impl SearchDefaults {
    /// Merge with another set of defaults
    pub fn merge(&mut self, other: SearchDefaults) {
        if !other.file_types.is_empty() {
            self.file_types = other.file_types;
        }

        self.include_declarations = other.include_declarations;
        self.include_usages = other.include_usages;
        self.context_lines = other.context_lines;

        if other.max_results > 0 {
            self.max_results = other.max_results;
        }
    }
}
