//! Candidate file discovery

use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Directory names that are never descended into, at any depth
pub const EXCLUDED_DIRS: &[&str] = &["node_modules", ".git", "dist", "build", ".next", "coverage"];

/// Collect every regular file under `root` whose extension is in `extensions`
///
/// Extensions are compared case-insensitively and must carry their leading dot.
/// Entries are visited in file-name order so that the result, and therefore
/// fairness and truncation, are reproducible. Unreadable directories are
/// logged and skipped. Symbolic links are not followed. A root that is not a
/// directory yields nothing.
pub fn collect_files(root: &Path, extensions: &[String]) -> Vec<PathBuf> {
    if !root.is_dir() {
        warn!(root = %root.display(), "Search root is not a directory");
        return Vec::new();
    }

    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_excluded_dir(entry));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| root.display().to_string());
                warn!(path = %path, error = %e, "Skipping unreadable directory entry");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        if has_wanted_extension(entry.path(), extensions) {
            files.push(entry.into_path());
        }
    }

    debug!(root = %root.display(), count = files.len(), "Collected candidate files");
    files
}

fn is_excluded_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| EXCLUDED_DIRS.contains(&name))
}

/// Lower-cased extension of `path` including the leading dot
pub fn dotted_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_lowercase()))
}

fn has_wanted_extension(path: &Path, extensions: &[String]) -> bool {
    match dotted_extension(path) {
        Some(ext) => extensions.iter().any(|wanted| wanted.eq_ignore_ascii_case(&ext)),
        None => false,
    }
}
