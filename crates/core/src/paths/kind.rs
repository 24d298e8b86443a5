//! Classification of project files by test convention

use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

pub const SPEC_SUFFIX: &str = "_spec.rb";
pub const TEST_SUFFIX: &str = "_test.rb";
pub const STEPS_SUFFIX: &str = "_steps.rb";
pub const FEATURE_EXTENSION: &str = ".feature";
pub const RUBY_EXTENSION: &str = ".rb";
pub const STEP_DEFINITIONS: &str = "step_definitions";

/// What role a file plays in a project's test layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    /// `*_spec.rb`
    Spec,
    /// `*_test.rb`
    Test,
    /// `*.feature`
    Feature,
    /// `features/step_definitions/**/*_steps.rb`
    StepDefinition,
    /// Anything else
    Source,
}

impl FileKind {
    pub fn of(path: &Path) -> Self {
        let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");

        if file_name.ends_with(SPEC_SUFFIX) {
            FileKind::Spec
        } else if file_name.ends_with(TEST_SUFFIX) {
            FileKind::Test
        } else if file_name.ends_with(FEATURE_EXTENSION) {
            FileKind::Feature
        } else if file_name.ends_with(STEPS_SUFFIX)
            && path
                .components()
                .any(|c| c.as_os_str() == STEP_DEFINITIONS)
        {
            FileKind::StepDefinition
        } else {
            FileKind::Source
        }
    }

    /// Spec, test and feature files are runnable as they are
    pub fn is_test(self) -> bool {
        matches!(self, FileKind::Spec | FileKind::Test | FileKind::Feature)
    }

    /// The test root this kind of file conventionally lives in
    pub fn root(self) -> Option<TestRoot> {
        match self {
            FileKind::Spec => Some(TestRoot::Spec),
            FileKind::Test => Some(TestRoot::Test),
            FileKind::Feature | FileKind::StepDefinition => Some(TestRoot::Features),
            FileKind::Source => None,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            FileKind::Spec => SPEC_SUFFIX,
            FileKind::Test => TEST_SUFFIX,
            FileKind::Feature => FEATURE_EXTENSION,
            FileKind::StepDefinition => STEPS_SUFFIX,
            FileKind::Source => RUBY_EXTENSION,
        }
    }

    /// Path segments with the conventions of this kind removed.
    ///
    /// The leading test root, the `step_definitions` directory and the
    /// naming suffix are dropped, so `spec/models/user_spec.rb`,
    /// `app/models/user.rb` and `features/step_definitions/models/user_steps.rb`
    /// all end in `["models", "user"]`.
    pub fn normalized_segments(self, path: &Path) -> Vec<String> {
        let mut segments = segments(path);

        if let Some(root) = self.root() {
            if segments.len() > 1 && segments[0] == root.dir_name() {
                segments.remove(0);
            }
        }

        if self == FileKind::StepDefinition {
            if let Some(pos) = segments.iter().position(|s| s == STEP_DEFINITIONS) {
                segments.remove(pos);
            }
        }

        if let Some(last) = segments.last_mut() {
            if let Some(stripped) = last.strip_suffix(self.suffix()) {
                *last = stripped.to_string();
            }
        }

        segments
    }
}

/// The conventional test directories, in lookup order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestRoot {
    Spec,
    Test,
    Features,
}

impl TestRoot {
    pub const ALL: [TestRoot; 3] = [TestRoot::Spec, TestRoot::Test, TestRoot::Features];

    pub fn dir_name(self) -> &'static str {
        match self {
            TestRoot::Spec => "spec",
            TestRoot::Test => "test",
            TestRoot::Features => "features",
        }
    }

    pub fn path(self) -> &'static Path {
        Path::new(self.dir_name())
    }

    /// Kind of the runnable files kept under this root
    pub fn file_kind(self) -> FileKind {
        match self {
            TestRoot::Spec => FileKind::Spec,
            TestRoot::Test => FileKind::Test,
            TestRoot::Features => FileKind::Feature,
        }
    }

    /// Root a path starts with, if any
    pub fn containing(path: &Path) -> Option<TestRoot> {
        let first = path.components().find_map(|c| match c {
            Component::Normal(name) => name.to_str(),
            _ => None,
        })?;

        TestRoot::ALL.into_iter().find(|root| root.dir_name() == first)
    }
}

/// Normal components of a path as strings
pub fn segments(path: &Path) -> Vec<String> {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect()
}

/// Drop `.` components so `./app/user.rb` and `app/user.rb` resolve alike
pub fn clean(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}
