//! Line-by-line scanning of a single file

use super::collector::dotted_extension;
use super::patterns::{PatternRegistry, PatternRule};
use super::types::{MatchKind, UsageMatch};
use std::path::Path;

/// Per-file scan settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    pub include_declarations: bool,
    pub include_usages: bool,
    pub context_lines: usize,
    /// Quota for this file; scanning stops once it is reached
    pub max_matches: usize,
}

impl ScanOptions {
    fn accepts(&self, kind: MatchKind) -> bool {
        match kind {
            MatchKind::Declaration => self.include_declarations,
            MatchKind::Usage => self.include_usages,
        }
    }
}

/// Scan `content` with the rules registered for the extension of `path`
pub fn scan(
    path: &Path,
    content: &str,
    registry: &PatternRegistry,
    options: &ScanOptions,
) -> Vec<UsageMatch> {
    let extension = dotted_extension(path).unwrap_or_default();
    scan_content(content, registry.rules_for(&extension), options)
}

/// Apply `rules` to each line in order and collect accepted occurrences
///
/// Every non-overlapping occurrence of every rule is reported, so a single
/// line can produce several matches at the same position. The result never
/// holds more than `options.max_matches` entries.
pub fn scan_content(content: &str, rules: &[PatternRule], options: &ScanOptions) -> Vec<UsageMatch> {
    let mut matches = Vec::new();
    if options.max_matches == 0 || !(options.include_declarations || options.include_usages) {
        return matches;
    }

    let lines: Vec<&str> = content.lines().collect();

    for (index, line) in lines.iter().enumerate() {
        for rule in rules.iter().filter(|rule| options.accepts(rule.kind)) {
            for found in rule.regex.find_iter(line) {
                matches.push(UsageMatch {
                    line_number: index + 1,
                    kind: rule.kind,
                    context: context_window(&lines, index, options.context_lines),
                    matched_text: found.as_str().to_string(),
                    column: line[..found.start()].chars().count(),
                });

                if matches.len() >= options.max_matches {
                    return matches;
                }
            }
        }
    }

    matches
}

/// Lines `index - radius ..= index + radius`, clamped to the file, newline-joined
pub fn context_window(lines: &[&str], index: usize, radius: usize) -> String {
    if lines.is_empty() {
        return String::new();
    }
    let last = lines.len() - 1;
    let index = index.min(last);
    let start = index.saturating_sub(radius);
    let end = index.saturating_add(radius).min(last);
    lines[start..=end].join("\n")
}
