//! runspec - Find the spec for a Ruby file and the command that runs it
//!
//! This crate provides functionality to:
//! - Map source files to their specs, tests or features and back, by
//!   similarity of path segments
//! - Pick the runner for a spec from the project layout and `Gemfile.lock`
//!   (`script/test`, binstubs, `bundle exec`, plain `ruby`)
//! - Run the resulting command
pub mod command;
pub mod config;
pub mod error;
pub mod fs;
pub mod lockfile;
pub mod paths;
pub mod runner;

// Re-export commonly used types and traits
pub use error::{Error, Result};

// Re-export main API components
pub use command::{CommandResolver, CommandType, SpecCommand};
pub use config::{Config, ScriptOverride};
pub use fs::{FileSystem, MemoryFileSystem, OsFileSystem};
pub use lockfile::{LockfileInfo, LockfileKind};
pub use paths::{FileKind, PathResolver, TestRoot};
pub use runner::{Analysis, SpecRunner};
