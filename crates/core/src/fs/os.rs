//! `std::fs` backed implementation of [`FileSystem`]

use super::FileSystem;
use std::io;
use std::path::{Path, PathBuf};
use tracing::trace;
use walkdir::{DirEntry, WalkDir};

/// Queries a project directory on disk.
#[derive(Debug, Clone)]
pub struct OsFileSystem {
    root: PathBuf,
}

impl OsFileSystem {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn absolute(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}

impl FileSystem for OsFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.absolute(path).exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.absolute(path).is_dir()
    }

    #[cfg(unix)]
    fn is_executable(&self, path: &Path) -> bool {
        use std::os::unix::fs::PermissionsExt;

        match std::fs::metadata(self.absolute(path)) {
            Ok(metadata) => metadata.is_file() && metadata.permissions().mode() & 0o111 != 0,
            Err(_) => false,
        }
    }

    #[cfg(not(unix))]
    fn is_executable(&self, path: &Path) -> bool {
        self.absolute(path).is_file()
    }

    fn list_files_recursive(&self, dir: &Path) -> Vec<PathBuf> {
        let start = self.absolute(dir);
        trace!("Walking {:?}", start);

        let mut files: Vec<PathBuf> = WalkDir::new(&start)
            .follow_links(true)
            .into_iter()
            .filter_entry(|e| !is_hidden(e))
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter_map(|e| {
                e.path()
                    .strip_prefix(&self.root)
                    .ok()
                    .map(Path::to_path_buf)
            })
            .collect();

        files.sort();
        files
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(self.absolute(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_list_files_is_relative_and_sorted() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("spec/models")).unwrap();
        fs::write(temp_dir.path().join("spec/models/user_spec.rb"), "").unwrap();
        fs::write(temp_dir.path().join("spec/a_spec.rb"), "").unwrap();

        let fs = OsFileSystem::new(temp_dir.path());
        assert_eq!(
            fs.list_files_recursive(Path::new("spec")),
            vec![
                PathBuf::from("spec/a_spec.rb"),
                PathBuf::from("spec/models/user_spec.rb"),
            ]
        );
    }

    #[test]
    fn test_hidden_directories_are_skipped() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join(".bundle")).unwrap();
        fs::write(temp_dir.path().join(".bundle/config.rb"), "").unwrap();
        fs::write(temp_dir.path().join("foo.rb"), "").unwrap();

        let fs = OsFileSystem::new(temp_dir.path());
        assert_eq!(
            fs.list_files_recursive(Path::new("")),
            vec![PathBuf::from("foo.rb")]
        );
    }

    #[test]
    fn test_missing_directory_lists_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let fs = OsFileSystem::new(temp_dir.path());
        assert!(fs.list_files_recursive(Path::new("spec")).is_empty());
        assert!(!fs.is_dir(Path::new("spec")));
    }

    #[cfg(unix)]
    #[test]
    fn test_executable_bit() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let script = temp_dir.path().join("test");
        fs::write(&script, "#!/bin/sh\n").unwrap();

        let fs_query = OsFileSystem::new(temp_dir.path());
        assert!(!fs_query.is_executable(Path::new("test")));

        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        assert!(fs_query.is_executable(Path::new("test")));
        assert!(!fs_query.is_executable(Path::new("missing")));
    }
}
