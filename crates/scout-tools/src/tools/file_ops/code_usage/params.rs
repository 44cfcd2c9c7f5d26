//! Tool parameter definitions and argument parsing for code usage search

use super::CodeUsageTool;
use super::types::SearchRequest;
use scout_core::config::SearchDefaults;
use scout_core::tools::base::{FileSystemTool, ToolError};
use scout_core::tools::types::{ToolCall, ToolParameter};
use serde_json::Value;

/// Get all tool parameters for the code usage tool
pub fn get_tool_parameters(defaults: &SearchDefaults) -> Vec<ToolParameter> {
    vec![
        ToolParameter::string(
            "root_path",
            "Directory to search, absolute or relative to the working directory",
        ),
        ToolParameter::string(
            "term",
            "Identifier to look for (matched literally, regex characters are escaped)",
        ),
        ToolParameter::array(
            "file_types",
            "File extensions to include, e.g. [\".js\", \".py\"]",
            "string",
        )
        .optional()
        .with_default(defaults.file_types.clone()),
        ToolParameter::boolean(
            "include_declarations",
            "Report places where the term is declared",
        )
        .optional()
        .with_default(defaults.include_declarations),
        ToolParameter::boolean("include_usages", "Report places where the term is used")
            .optional()
            .with_default(defaults.include_usages),
        ToolParameter::number(
            "context_lines",
            "Lines of context to include on each side of a match",
        )
        .optional()
        .with_default(defaults.context_lines),
        ToolParameter::number(
            "max_results",
            "Maximum number of matches to return across all files",
        )
        .optional()
        .with_default(defaults.max_results),
        ToolParameter::optional_string(
            "reference_file",
            "Optional file passed to the summarizer as additional context",
        ),
    ]
}

/// Check every argument without touching the filesystem
pub fn validate_arguments(call: &ToolCall) -> Result<(), ToolError> {
    required_string(call, "root_path")?;
    let term = required_string(call, "term")?;
    if term.trim().is_empty() {
        return Err(ToolError::InvalidArguments(
            "'term' must not be blank".to_string(),
        ));
    }

    file_types_argument(call)?;
    bool_argument(call, "include_declarations")?;
    bool_argument(call, "include_usages")?;
    integer_argument(call, "context_lines")?;

    if let Some(max_results) = integer_argument(call, "max_results")? {
        if max_results == 0 {
            return Err(ToolError::InvalidArguments(
                "'max_results' must be greater than zero".to_string(),
            ));
        }
    }

    if call.has_argument("reference_file") && call.get_string("reference_file").is_none() {
        return Err(ToolError::InvalidArguments(
            "'reference_file' must be a string".to_string(),
        ));
    }

    Ok(())
}

impl CodeUsageTool {
    /// Build a validated request, filling omitted inputs from the tool's defaults
    pub fn parse_request(&self, call: &ToolCall) -> Result<SearchRequest, ToolError> {
        validate_arguments(call)?;

        let defaults = &self.defaults;
        let root_path = self.resolve_path(&required_string(call, "root_path")?);
        let term = required_string(call, "term")?;

        let file_types = file_types_argument(call)?.unwrap_or_else(|| {
            defaults
                .file_types
                .iter()
                .filter_map(|ext| normalize_extension(ext))
                .collect()
        });

        Ok(SearchRequest {
            root_path,
            term,
            file_types,
            include_declarations: bool_argument(call, "include_declarations")?
                .unwrap_or(defaults.include_declarations),
            include_usages: bool_argument(call, "include_usages")?
                .unwrap_or(defaults.include_usages),
            context_lines: integer_argument(call, "context_lines")?
                .map(|n| n as usize)
                .unwrap_or(defaults.context_lines),
            max_results: integer_argument(call, "max_results")?
                .map(|n| n as usize)
                .unwrap_or(defaults.max_results)
                .max(1),
            reference_file: call.get_string("reference_file"),
        })
    }
}

/// Trim an extension, add a missing leading dot, and lower-case it
pub fn normalize_extension(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "." {
        return None;
    }
    let lowered = trimmed.to_lowercase();
    if lowered.starts_with('.') {
        Some(lowered)
    } else {
        Some(format!(".{}", lowered))
    }
}

fn required_string(call: &ToolCall, key: &str) -> Result<String, ToolError> {
    match call.arguments.get(key) {
        None | Some(Value::Null) => Err(ToolError::InvalidArguments(format!(
            "Missing '{}' parameter",
            key
        ))),
        Some(Value::String(s)) if s.is_empty() => Err(ToolError::InvalidArguments(format!(
            "'{}' must not be empty",
            key
        ))),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ToolError::InvalidArguments(format!(
            "'{}' must be a string",
            key
        ))),
    }
}

fn bool_argument(call: &ToolCall, key: &str) -> Result<Option<bool>, ToolError> {
    if !call.has_argument(key) {
        return Ok(None);
    }
    call.get_bool(key)
        .map(Some)
        .ok_or_else(|| ToolError::InvalidArguments(format!("'{}' must be a boolean", key)))
}

fn integer_argument(call: &ToolCall, key: &str) -> Result<Option<u64>, ToolError> {
    if !call.has_argument(key) {
        return Ok(None);
    }
    let invalid = || {
        ToolError::InvalidArguments(format!("'{}' must be a non-negative integer", key))
    };
    let number = call.get_number(key).ok_or_else(invalid)?;
    if !number.is_finite() || number < 0.0 || number.fract() != 0.0 {
        return Err(invalid());
    }
    Ok(Some(number as u64))
}

fn file_types_argument(call: &ToolCall) -> Result<Option<Vec<String>>, ToolError> {
    if !call.has_argument("file_types") {
        return Ok(None);
    }
    let raw = call.get_string_list("file_types").ok_or_else(|| {
        ToolError::InvalidArguments("'file_types' must be an array of strings".to_string())
    })?;
    Ok(Some(
        raw.iter()
            .filter_map(|ext| normalize_extension(ext))
            .collect(),
    ))
}
