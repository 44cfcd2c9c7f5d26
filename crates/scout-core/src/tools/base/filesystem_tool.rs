//! File system helper trait for tools

use super::tool_trait::Tool;
use std::path::{Path, PathBuf};

/// Helper trait for tools that operate on paths relative to a working
/// directory.
pub trait FileSystemTool: Tool {
    /// Get the working directory for file operations.
    fn working_directory(&self) -> &Path;

    /// Resolve a relative path to an absolute path.
    ///
    /// If the path is already absolute, it is returned unchanged.
    /// Otherwise, it is joined with the working directory.
    fn resolve_path(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.working_directory().join(path)
        }
    }
}
