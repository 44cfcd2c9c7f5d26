//! File and code analysis tools

pub mod code_usage;

pub use code_usage::CodeUsageTool;
