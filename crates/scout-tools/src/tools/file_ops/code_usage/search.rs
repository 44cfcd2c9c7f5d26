//! Aggregation of per-file scans into a bounded result

use super::collector::collect_files;
use super::patterns::PatternRegistry;
use super::reader::{FsReader, SourceReader, decode_text};
use super::scanner::{ScanOptions, scan};
use super::types::{FileResult, SearchRequest, SearchResult};
use scout_core::tools::base::ToolError;
use std::path::Path;
use tracing::{debug, info, warn};

/// Run a search against the local filesystem
pub async fn search(request: &SearchRequest) -> Result<SearchResult, ToolError> {
    search_with_reader(request, &FsReader).await
}

/// Run a search, reading file contents through `reader`
///
/// Files are visited in collection order. Each one gets the same quota,
/// computed once from the number of collected files. Once the running total
/// reaches the global cap, no further file is read.
pub async fn search_with_reader(
    request: &SearchRequest,
    reader: &dyn SourceReader,
) -> Result<SearchResult, ToolError> {
    let registry = PatternRegistry::new(&request.term)?;
    let files = collect_files(&request.root_path, &request.file_types);

    if files.is_empty() {
        info!(
            root = %request.root_path.display(),
            "No files matched the requested extensions"
        );
        return Ok(SearchResult::empty(0));
    }

    let quota = request.per_file_quota(files.len());
    let mut results = Vec::new();
    let mut running_total = 0usize;

    for (index, path) in files.iter().enumerate() {
        if running_total >= request.max_results {
            debug!(
                skipped_files = files.len() - index,
                "Global match cap reached, stopping"
            );
            break;
        }

        let Some(content) = read_source(reader, path).await else {
            continue;
        };

        let options = ScanOptions {
            include_declarations: request.include_declarations,
            include_usages: request.include_usages,
            context_lines: request.context_lines,
            max_matches: quota.min(request.max_results - running_total),
        };

        let matches = scan(path, &content, &registry, &options);
        if matches.is_empty() {
            continue;
        }

        debug!(file = %path.display(), matches = matches.len(), "Scanned file");
        running_total += matches.len();
        results.push(FileResult::new(path.clone(), matches));
    }

    let total_matches = results.iter().map(|r| r.total_matches).sum();
    info!(
        term = %request.term,
        total_files = files.len(),
        total_matches,
        "Code usage search completed"
    );

    Ok(SearchResult {
        total_files: files.len(),
        total_matches,
        results,
    })
}

async fn read_source(reader: &dyn SourceReader, path: &Path) -> Option<String> {
    match reader.read(path).await {
        Ok(bytes) => {
            let text = decode_text(bytes);
            if text.is_none() {
                debug!(file = %path.display(), "Skipping binary file");
            }
            text
        }
        Err(e) => {
            warn!(file = %path.display(), error = %e, "Skipping unreadable file");
            None
        }
    }
}
