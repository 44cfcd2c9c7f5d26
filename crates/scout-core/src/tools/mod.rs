//! Tool system for Scout

pub mod base;
pub mod registry;
pub mod types;

pub use base::{FileSystemTool, Tool, ToolError};
pub use registry::ToolRegistry;
pub use types::{ToolCall, ToolParameter, ToolResult, ToolSchema};
