//! Error types for Scout

use crate::tools::base::ToolError;
use thiserror::Error;

/// Result type alias for Scout operations
pub type ScoutResult<T> = Result<T, ScoutError>;

/// Main error type for Scout
#[derive(Error, Debug, Clone)]
pub enum ScoutError {
    /// Configuration related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Tool execution errors
    #[error("Tool error: {tool_name}: {message}")]
    Tool { tool_name: String, message: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Invalid input errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generic error with context
    #[error("Error: {0}")]
    Other(String),
}

impl ScoutError {
    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a new tool error
    pub fn tool(tool_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Tool {
            tool_name: tool_name.into(),
            message: message.into(),
        }
    }

    /// Create a new invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a generic error
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}

impl From<std::io::Error> for ScoutError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error.to_string())
    }
}

impl From<serde_json::Error> for ScoutError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error.to_string())
    }
}

impl From<ToolError> for ScoutError {
    fn from(err: ToolError) -> Self {
        match err {
            ToolError::InvalidArguments(msg) => Self::InvalidInput(msg),
            ToolError::NotFound(name) => Self::tool(name, "Tool not found"),
            ToolError::ExecutionFailed(msg) => Self::tool("unknown", msg),
            ToolError::Timeout => Self::tool("unknown", "Tool execution timeout"),
            ToolError::Io(err) => Self::Io(err.to_string()),
            ToolError::Json(err) => Self::Json(err.to_string()),
            ToolError::Other(msg) => Self::tool("unknown", msg),
        }
    }
}
