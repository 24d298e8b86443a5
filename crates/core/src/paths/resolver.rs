//! Spec ⇄ target path resolution

use super::kind::{
    clean, FileKind, TestRoot, FEATURE_EXTENSION, RUBY_EXTENSION, STEPS_SUFFIX, STEP_DEFINITIONS,
};
use super::similarity::best_match;
use crate::fs::FileSystem;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Maps source files to their specs and back.
///
/// Lookups never fail: when nothing on disk corresponds to the input, a
/// conventional location is returned instead (see [`PathResolver::spec_path`]).
pub struct PathResolver<F> {
    fs: F,
}

impl<F: FileSystem> PathResolver<F> {
    pub fn new(fs: F) -> Self {
        Self { fs }
    }

    /// Find the spec, test or feature that exercises `path`.
    ///
    /// Spec, test and feature paths come back unchanged. Step definitions
    /// resolve to the closest feature under `features/`. Anything else is
    /// looked up under `spec/`, or `test/` when there is no `spec/`, falling
    /// back to `<root>/<name>_spec.rb` (or `_test.rb`) when no file matches.
    /// Without any test root the path is returned as is.
    pub fn spec_path(&self, path: &Path) -> PathBuf {
        let kind = FileKind::of(path);
        if kind.is_test() {
            return path.to_path_buf();
        }

        let path = clean(path);

        if kind == FileKind::StepDefinition && self.fs.is_dir(TestRoot::Features.path()) {
            return self.feature_for_steps(&path);
        }

        for root in [TestRoot::Spec, TestRoot::Test] {
            if self.fs.is_dir(root.path()) {
                return self.spec_under_root(root, &path);
            }
        }

        debug!("No test root found for {:?}", path);
        path
    }

    /// Find the file exercised by a spec, test or feature.
    ///
    /// Other paths come back unchanged.
    pub fn target_path(&self, path: &Path) -> PathBuf {
        match FileKind::of(path) {
            kind @ (FileKind::Spec | FileKind::Test) => self.source_for_test(kind, &clean(path)),
            FileKind::Feature => self.steps_for_feature(&clean(path)),
            FileKind::StepDefinition | FileKind::Source => path.to_path_buf(),
        }
    }

    /// Toggle between a file and its spec
    pub fn alternate_path(&self, path: &Path) -> PathBuf {
        if FileKind::of(path).is_test() {
            self.target_path(path)
        } else {
            self.spec_path(path)
        }
    }

    fn spec_under_root(&self, root: TestRoot, path: &Path) -> PathBuf {
        let kind = root.file_kind();
        let target = FileKind::Source.normalized_segments(path);
        let Some(name) = target.last() else {
            return path.to_path_buf();
        };
        let file_name = format!("{name}{}", suffix_for(kind));

        // `..` would let the mirrored location climb out of the test root
        let escapes = path.components().any(|c| matches!(c, Component::ParentDir));
        if path.is_relative() && !escapes {
            let mirrored = root
                .path()
                .join(path.parent().unwrap_or(Path::new("")))
                .join(&file_name);
            if self.fs.exists(&mirrored) {
                debug!("Found mirrored spec {:?}", mirrored);
                return mirrored;
            }
        }

        let candidates = self
            .fs
            .list_files_recursive(root.path())
            .into_iter()
            .filter(|file| FileKind::of(file) == kind)
            .map(|file| {
                let segments = kind.normalized_segments(&file);
                (file, segments)
            });

        match best_match(&target, candidates) {
            Some(candidate) => {
                debug!(
                    "Best {} match for {:?}: {:?} (score {})",
                    root.dir_name(),
                    path,
                    candidate.path,
                    candidate.score
                );
                candidate.path
            }
            None => {
                debug!("No {} match for {:?}, using default", root.dir_name(), path);
                root.path().join(file_name)
            }
        }
    }

    fn feature_for_steps(&self, path: &Path) -> PathBuf {
        let target = FileKind::StepDefinition.normalized_segments(path);
        let Some(name) = target.last() else {
            return path.to_path_buf();
        };
        let step_definitions = TestRoot::Features.path().join(STEP_DEFINITIONS);

        let candidates = self
            .fs
            .list_files_recursive(TestRoot::Features.path())
            .into_iter()
            .filter(|file| FileKind::of(file) == FileKind::Feature)
            .filter(|file| !file.starts_with(&step_definitions))
            .map(|file| {
                let segments = FileKind::Feature.normalized_segments(&file);
                (file, segments)
            });

        match best_match(&target, candidates) {
            Some(candidate) => {
                debug!("Best feature for {:?}: {:?}", path, candidate.path);
                candidate.path
            }
            None => TestRoot::Features
                .path()
                .join(format!("{name}{FEATURE_EXTENSION}")),
        }
    }

    fn source_for_test(&self, kind: FileKind, path: &Path) -> PathBuf {
        let target = kind.normalized_segments(path);
        let Some(name) = target.last() else {
            return path.to_path_buf();
        };

        let candidates = self
            .fs
            .list_files_recursive(Path::new(""))
            .into_iter()
            .filter(|file| TestRoot::containing(file).is_none())
            .filter(|file| FileKind::of(file) == FileKind::Source)
            .map(|file| {
                let segments = FileKind::Source.normalized_segments(&file);
                (file, segments)
            });

        if let Some(candidate) = best_match(&target, candidates) {
            debug!(
                "Best target for {:?}: {:?} (score {})",
                path, candidate.path, candidate.score
            );
            return candidate.path;
        }

        // Assume the source tree mirrors the test tree
        let mut mirrored: PathBuf = target[..target.len() - 1].iter().collect();
        mirrored.push(source_file_name(name));
        debug!("No target found for {:?}, assuming {:?}", path, mirrored);
        mirrored
    }

    fn steps_for_feature(&self, path: &Path) -> PathBuf {
        let target = FileKind::Feature.normalized_segments(path);
        let Some(name) = target.last() else {
            return path.to_path_buf();
        };
        let step_definitions = TestRoot::Features.path().join(STEP_DEFINITIONS);

        let candidates = self
            .fs
            .list_files_recursive(&step_definitions)
            .into_iter()
            .filter(|file| FileKind::of(file) == FileKind::StepDefinition)
            .map(|file| {
                let segments = FileKind::StepDefinition.normalized_segments(&file);
                (file, segments)
            });

        match best_match(&target, candidates) {
            Some(candidate) => candidate.path,
            None => step_definitions.join(format!("{name}{STEPS_SUFFIX}")),
        }
    }
}

fn suffix_for(kind: FileKind) -> &'static str {
    match kind {
        FileKind::Test => super::kind::TEST_SUFFIX,
        _ => super::kind::SPEC_SUFFIX,
    }
}

/// `user` becomes `user.rb`; names that already carry an extension, like
/// `runspec.vim`, are kept.
fn source_file_name(name: &str) -> String {
    if name.contains('.') {
        name.to_string()
    } else {
        format!("{name}{RUBY_EXTENSION}")
    }
}
