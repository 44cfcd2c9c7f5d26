//! CLI commands

pub mod config;
pub mod schema;
pub mod search;
pub mod tools;
