//! Choosing the runner for a spec file

use super::spec_command::SpecCommand;
use crate::config::{Config, ScriptOverride};
use crate::fs::FileSystem;
use crate::lockfile::{LockfileInfo, LockfileKind};
use crate::paths::{FileKind, TestRoot};
use std::path::Path;
use tracing::debug;

pub const SCRIPT_TEST: &str = "script/test";
pub const LIB_DIR: &str = "lib";
pub const RSPEC: &str = "rspec";
pub const CUCUMBER: &str = "cucumber";

/// Works out how to run a spec from the project layout and lockfile.
///
/// Resolution is total: every combination of inputs yields a command,
/// plain `ruby` being the last resort.
pub struct CommandResolver<F> {
    fs: F,
    script_override: ScriptOverride,
    extra_args: Vec<String>,
}

impl<F: FileSystem> CommandResolver<F> {
    pub fn new(fs: F) -> Self {
        Self {
            fs,
            script_override: ScriptOverride::default(),
            extra_args: Vec::new(),
        }
    }

    pub fn with_config(mut self, config: &Config) -> Self {
        self.script_override = config.script_override;
        self.extra_args = config.extra_args.clone();
        self
    }

    /// Resolve the command for `spec_path` given the lockfile text, if any.
    pub fn resolve(&self, spec_path: &Path, lockfile: Option<&str>) -> SpecCommand {
        let kind = FileKind::of(spec_path);
        let info = LockfileInfo::parse(lockfile);
        let lockfile_kind = info.kind();
        debug!("Resolving command for {:?} ({:?}, {:?})", spec_path, kind, lockfile_kind);

        if self.script_applies(lockfile_kind) && self.fs.is_executable(Path::new(SCRIPT_TEST)) {
            debug!("Using {}", SCRIPT_TEST);
            return SpecCommand::script(SCRIPT_TEST);
        }

        let command = match locked_runner(kind, &info) {
            Some(runner) => self.bundled(runner),
            None if kind == FileKind::Feature => SpecCommand::runner(CUCUMBER),
            None if lockfile_kind == LockfileKind::PlainLocked => {
                SpecCommand::ruby(vec!["-rbundler/setup".to_string()])
            }
            None => SpecCommand::ruby(self.load_path_flags(spec_path, kind)),
        };

        command.with_args(self.extra_args.iter().cloned())
    }

    fn script_applies(&self, lockfile_kind: LockfileKind) -> bool {
        match self.script_override {
            ScriptOverride::Always => true,
            ScriptOverride::UnlessLocked => !lockfile_kind.is_framework_locked(),
            ScriptOverride::Never => false,
        }
    }

    /// `bin/<runner>` when executable, `bundle exec <runner>` otherwise
    fn bundled(&self, runner: &str) -> SpecCommand {
        let binstub = format!("bin/{runner}");
        if self.fs.is_executable(Path::new(&binstub)) {
            debug!("Using binstub {}", binstub);
            SpecCommand::binstub(binstub)
        } else {
            SpecCommand::bundle_exec(runner)
        }
    }

    fn load_path_flags(&self, spec_path: &Path, kind: FileKind) -> Vec<String> {
        let mut flags = Vec::new();

        if self.fs.is_dir(Path::new(LIB_DIR)) {
            flags.push(format!("-I{LIB_DIR}"));
        }

        if let Some(root) = load_path_root(spec_path, kind) {
            if self.fs.is_dir(root.path()) {
                flags.push(format!("-I{}", root.dir_name()));
            }
        }

        flags
    }
}

/// The framework pinned in the lockfile that can run this kind of file.
///
/// Features need Cucumber; anything else prefers RSpec and falls back to
/// Cucumber, so a single-framework lockfile always picks its framework.
fn locked_runner(kind: FileKind, info: &LockfileInfo) -> Option<&'static str> {
    match kind {
        FileKind::Feature => info.has_cucumber.then_some(CUCUMBER),
        _ if info.has_rspec => Some(RSPEC),
        _ if info.has_cucumber => Some(CUCUMBER),
        _ => None,
    }
}

fn load_path_root(spec_path: &Path, kind: FileKind) -> Option<TestRoot> {
    match kind {
        FileKind::Spec => Some(TestRoot::Spec),
        FileKind::Test => Some(TestRoot::Test),
        _ => TestRoot::containing(spec_path).filter(|root| *root != TestRoot::Features),
    }
}
