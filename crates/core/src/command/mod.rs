//! Spec command generation and execution

pub mod resolver;
pub mod spec_command;

// Re-export commonly used types
pub use resolver::CommandResolver;
pub use spec_command::{CommandType, SpecCommand};
