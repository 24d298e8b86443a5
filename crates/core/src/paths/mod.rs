//! Locating the spec for a file and the file for a spec

pub mod kind;
pub mod resolver;
pub mod similarity;

pub use kind::{FileKind, TestRoot};
pub use resolver::PathResolver;
pub use similarity::{best_match, score, Candidate};
