//! Scout Core Library
//!
//! This crate provides the shared building blocks for Scout: the tool
//! abstraction used to expose search operations, the crate-wide error type,
//! and configuration loading.

pub mod config;
pub mod error;
pub mod tools;

// Re-export commonly used types
pub use config::{Config, LoggingConfig, SearchDefaults};
pub use error::{ScoutError, ScoutResult};
pub use tools::{Tool, ToolCall, ToolError, ToolRegistry, ToolResult, ToolSchema};
