//! In-memory implementation of [`FileSystem`]

use super::FileSystem;
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
struct Entry {
    executable: bool,
    contents: String,
}

/// A project tree held in memory.
///
/// Directories are implied by the files below them and can also be
/// declared empty with [`MemoryFileSystem::with_dir`].
#[derive(Debug, Clone, Default)]
pub struct MemoryFileSystem {
    files: BTreeMap<PathBuf, Entry>,
    dirs: BTreeSet<PathBuf>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        self.insert(path.as_ref(), Entry::default());
        self
    }

    pub fn with_contents(mut self, path: impl AsRef<Path>, contents: impl Into<String>) -> Self {
        self.insert(
            path.as_ref(),
            Entry {
                executable: false,
                contents: contents.into(),
            },
        );
        self
    }

    pub fn with_executable(mut self, path: impl AsRef<Path>) -> Self {
        self.insert(
            path.as_ref(),
            Entry {
                executable: true,
                contents: String::new(),
            },
        );
        self
    }

    pub fn with_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.dirs.insert(path.as_ref().to_path_buf());
        self
    }

    fn insert(&mut self, path: &Path, entry: Entry) {
        self.files.insert(path.to_path_buf(), entry);
    }
}

impl FileSystem for MemoryFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path) || self.is_dir(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        if path.as_os_str().is_empty() {
            return true;
        }

        self.dirs.iter().any(|dir| dir.starts_with(path))
            || self
                .files
                .keys()
                .any(|file| file != path && file.starts_with(path))
    }

    fn is_executable(&self, path: &Path) -> bool {
        self.files.get(path).is_some_and(|entry| entry.executable)
    }

    fn list_files_recursive(&self, dir: &Path) -> Vec<PathBuf> {
        self.files
            .keys()
            .filter(|file| dir.as_os_str().is_empty() || (*file != dir && file.starts_with(dir)))
            .cloned()
            .collect()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files
            .get(path)
            .map(|entry| entry.contents.clone())
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, path.display().to_string()))
    }
}
