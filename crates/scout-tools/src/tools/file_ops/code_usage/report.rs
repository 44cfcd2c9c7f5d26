//! Human-readable rendering of search results

use super::types::{FileResult, SearchRequest, SearchResult};

/// Message returned when no file under the root has a requested extension
pub fn no_files_message(request: &SearchRequest) -> String {
    format!(
        "No code files found in {} with extensions: {}",
        request.root_path.display(),
        request.file_types.join(", ")
    )
}

/// Full report: header with totals followed by the per-file listing
pub fn render_report(request: &SearchRequest, result: &SearchResult) -> String {
    if result.total_files == 0 {
        return no_files_message(request);
    }

    let mut out = String::from("Code usage analysis\n\n");
    out.push_str(&format!("Term: `{}`\n", request.term));
    out.push_str(&format!("Directory: {}\n", request.root_path.display()));
    out.push_str(&format!("Files analyzed: {}\n", result.total_files));
    out.push_str(&format!("Total occurrences: {}\n", result.total_matches));

    if result.is_empty() {
        out.push_str(&format!("\nNo occurrences of `{}` found.", request.term));
        return out;
    }

    out.push_str("\nResults:\n");
    out.push_str(&render_listing(&result.results));
    out
}

/// Per-file listing, one block per file separated by blank lines
pub fn render_listing(results: &[FileResult]) -> String {
    results
        .iter()
        .map(render_file)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_file(file: &FileResult) -> String {
    let noun = if file.total_matches == 1 {
        "occurrence"
    } else {
        "occurrences"
    };
    let mut block = format!("\n{} ({} {})", file.path.display(), file.total_matches, noun);
    for m in &file.matches {
        block.push_str(&format!("\n  {}: {} - {}", m.line_number, m.kind, m.context));
    }
    block
}
