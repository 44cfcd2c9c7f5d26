//! Configuration management for Scout

mod file_loader;
mod logging_config;
mod model;
mod search_defaults;

pub use file_loader::{load_from_file, save_to_file};
pub use logging_config::{LogFormat, LoggingConfig};
pub use model::Config;
pub use search_defaults::{DEFAULT_FILE_TYPES, SearchDefaults};
