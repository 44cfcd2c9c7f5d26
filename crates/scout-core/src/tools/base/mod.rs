//! Base trait and types for tools
//!
//! This module provides the abstractions used to expose Scout's operations
//! behind a transport-independent call interface:
//!
//! - [`Tool`] - The trait every tool implements
//! - [`ToolError`] - Error types for tool operations
//! - [`FileSystemTool`] - Helper trait for tools that resolve paths
//!
//! # Examples
//!
//! ```no_run
//! use scout_core::tools::{Tool, ToolSchema};
//! use scout_core::tools::base::ToolError;
//! use scout_core::tools::types::{ToolCall, ToolResult};
//! use async_trait::async_trait;
//!
//! struct EchoTool;
//!
//! #[async_trait]
//! impl Tool for EchoTool {
//!     fn name(&self) -> &str { "echo" }
//!     fn description(&self) -> &str { "Echo the call id" }
//!     fn schema(&self) -> ToolSchema {
//!         ToolSchema::new(self.name(), self.description(), vec![])
//!     }
//!     async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
//!         Ok(ToolResult::success(&call.id, self.name(), call.id.clone()))
//!     }
//! }
//! ```

pub mod error;
pub mod filesystem_tool;
pub mod tool_trait;

pub use error::ToolError;
pub use filesystem_tool::FileSystemTool;
pub use tool_trait::Tool;
