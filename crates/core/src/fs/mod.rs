//! Filesystem query interface
//!
//! Resolution never touches `std::fs` directly. Every existence check goes
//! through [`FileSystem`] so the same logic runs against a real project
//! directory or an in-memory tree.

use std::io;
use std::path::{Path, PathBuf};

pub mod memory;
pub mod os;

pub use memory::MemoryFileSystem;
pub use os::OsFileSystem;

/// Read-only queries against a project tree.
///
/// All paths are relative to the project root.
pub trait FileSystem {
    /// Check if a file or directory exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Check if a path is a file the current user may execute
    fn is_executable(&self, path: &Path) -> bool;

    /// List every file below `dir`, sorted
    fn list_files_recursive(&self, dir: &Path) -> Vec<PathBuf>;

    /// Read a file's contents
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn is_executable(&self, path: &Path) -> bool {
        (**self).is_executable(path)
    }

    fn list_files_recursive(&self, dir: &Path) -> Vec<PathBuf> {
        (**self).list_files_recursive(dir)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        (**self).read_to_string(path)
    }
}
