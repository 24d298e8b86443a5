//! Configuration management for runspec

mod settings;

// Re-export main types
pub use settings::{Config, ScriptOverride, CONFIG_FILE_NAMES};
