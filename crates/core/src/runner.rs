//! Main runner that ties path and command resolution to a project root

use crate::{
    command::{CommandResolver, SpecCommand},
    config::Config,
    error::Result,
    fs::{FileSystem, OsFileSystem},
    lockfile::{self, LockfileKind},
    paths::{kind::clean, FileKind, PathResolver},
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Everything runspec knows about one file
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub file: PathBuf,
    pub kind: FileKind,
    pub spec_path: PathBuf,
    pub target_path: PathBuf,
    pub lockfile: LockfileKind,
    pub command: String,
    pub run: String,
}

pub struct SpecRunner<F = OsFileSystem> {
    fs: F,
    config: Config,
    project_root: PathBuf,
}

impl SpecRunner<OsFileSystem> {
    /// Open the project at `project_root`, loading its `.runspec.json`
    pub fn new(project_root: impl AsRef<Path>) -> Result<Self> {
        let project_root = project_root.as_ref().canonicalize()?;
        let config = Config::load_for_root(&project_root)?;
        debug!("Project root: {:?}", project_root);

        Ok(Self::with_fs(
            OsFileSystem::new(&project_root),
            config,
            project_root,
        ))
    }
}

impl<F: FileSystem> SpecRunner<F> {
    pub fn with_fs(fs: F, config: Config, project_root: PathBuf) -> Self {
        Self {
            fs,
            config,
            project_root,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Make `path` relative to the project root when it lies inside it
    pub fn relativize(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            if let Ok(relative) = path.strip_prefix(&self.project_root) {
                return clean(relative);
            }
            if let Ok(canonical) = path.canonicalize() {
                if let Ok(relative) = canonical.strip_prefix(&self.project_root) {
                    return relative.to_path_buf();
                }
            }
        }
        clean(path)
    }

    fn paths(&self) -> PathResolver<&F> {
        PathResolver::new(&self.fs)
    }

    pub fn spec_path(&self, path: &Path) -> PathBuf {
        self.paths().spec_path(&self.relativize(path))
    }

    pub fn target_path(&self, path: &Path) -> PathBuf {
        self.paths().target_path(&self.relativize(path))
    }

    pub fn alternate_path(&self, path: &Path) -> PathBuf {
        self.paths().alternate_path(&self.relativize(path))
    }

    /// Lockfile text, or `None` when it is missing or unreadable
    fn read_lockfile(&self) -> Option<String> {
        let lockfile = self.config.lockfile_path();
        match self.fs.read_to_string(lockfile) {
            Ok(text) => Some(text),
            Err(e) => {
                debug!("No lockfile at {:?}: {}", lockfile, e);
                None
            }
        }
    }

    pub fn lockfile_kind(&self) -> LockfileKind {
        lockfile::classify(self.read_lockfile().as_deref())
    }

    /// The command that runs `spec_path`, without the path itself
    pub fn command(&self, spec_path: &Path) -> SpecCommand {
        let lockfile = self.read_lockfile();
        CommandResolver::new(&self.fs)
            .with_config(&self.config)
            .resolve(&self.relativize(spec_path), lockfile.as_deref())
    }

    /// Resolve the spec for `path` and bind it to its command.
    ///
    /// `line` is forwarded as `spec:LINE` when `path` is itself the spec
    /// and the runner supports it.
    pub fn run_command(&self, path: &Path, line: Option<usize>) -> SpecCommand {
        let input_kind = FileKind::of(path);
        let spec_path = self.spec_path(path);
        let command = self.command(&spec_path);

        let mut spec_arg = spec_path.to_string_lossy().into_owned();
        if let Some(line) = line {
            if input_kind.is_test() && command.accepts_line_numbers() {
                spec_arg = format!("{spec_arg}:{line}");
            } else {
                debug!("Ignoring line {} for {:?}", line, path);
            }
        }

        let mut command = command
            .with_spec_path(spec_arg)
            .with_working_dir(self.project_root.to_string_lossy().into_owned());
        for (key, value) in &self.config.env {
            command = command.with_env(key.clone(), value.clone());
        }
        command
    }

    /// Describe `path`; `line` is applied to `run` the same way `run_command` applies it
    pub fn analyze(&self, path: &Path, line: Option<usize>) -> Analysis {
        let file = self.relativize(path);
        let spec_path = self.spec_path(&file);
        let command = self.command(&spec_path);

        Analysis {
            kind: FileKind::of(&file),
            target_path: self.target_path(&file),
            lockfile: self.lockfile_kind(),
            command: command.base_command(),
            run: self.run_command(&file, line).to_shell_command(),
            spec_path,
            file,
        }
    }
}
