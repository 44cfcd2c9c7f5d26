//! Error types for tool operations

/// Error type for tool operations
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// Invalid arguments provided to the tool
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Tool execution failed
    #[error("Execution failed: {0}")]
    ExecutionFailed(String),

    /// Tool not found
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// Execution exceeded the tool's time limit
    #[error("Tool execution timeout")]
    Timeout,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other error
    #[error("Other error: {0}")]
    Other(String),
}

impl ToolError {
    /// Stable code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ToolError::InvalidArguments(_) => "TOOL_INVALID_ARGS",
            ToolError::ExecutionFailed(_) => "TOOL_EXEC_FAILED",
            ToolError::NotFound(_) => "TOOL_NOT_FOUND",
            ToolError::Timeout => "TOOL_TIMEOUT",
            ToolError::Io(_) => "TOOL_IO_ERROR",
            ToolError::Json(_) => "TOOL_JSON_ERROR",
            ToolError::Other(_) => "TOOL_OTHER",
        }
    }

    /// Whether the error was caused by the caller's input
    pub fn is_input_error(&self) -> bool {
        matches!(self, ToolError::InvalidArguments(_))
    }
}
