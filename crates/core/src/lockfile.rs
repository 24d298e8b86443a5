//! Test framework detection from `Gemfile.lock` text
//!
//! Bundler lists every resolved gem as an indented `name (version)` line,
//! which is all we need to tell RSpec and Cucumber projects apart.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::debug;

pub const DEFAULT_LOCKFILE: &str = "Gemfile.lock";

/// A locked framework gem: the runner itself, its core, or its Rails integration.
/// Helper gems such as `rspec-expectations` are also used outside RSpec projects.
static LOCKED_GEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*(cucumber|rspec)(?:-(?:core|rails))? \(")
        .expect("locked gem pattern is valid")
});

/// How a project pins its test framework
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LockfileKind {
    /// No lockfile, or it could not be read
    NoLockfile,
    /// The lockfile names `cucumber`, `cucumber-core` or `cucumber-rails`
    CucumberLocked,
    /// The lockfile names `rspec`, `rspec-core` or `rspec-rails` but no Cucumber gem
    #[serde(rename = "rspec_locked")]
    RSpecLocked,
    /// The lockfile names neither framework
    PlainLocked,
}

impl LockfileKind {
    pub fn is_framework_locked(self) -> bool {
        matches!(self, LockfileKind::CucumberLocked | LockfileKind::RSpecLocked)
    }
}

/// Framework flags scanned out of a lockfile
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockfileInfo {
    pub has_cucumber: bool,
    pub has_rspec: bool,
    /// A lockfile exists but names neither framework
    pub has_any_lockfile: bool,
}

impl LockfileInfo {
    /// Scan lockfile text. `None` means there is no readable lockfile.
    pub fn parse(text: Option<&str>) -> Self {
        let Some(text) = text else {
            return Self::default();
        };

        let mut info = Self::default();
        for captures in LOCKED_GEM.captures_iter(text) {
            match &captures[1] {
                "cucumber" => info.has_cucumber = true,
                "rspec" => info.has_rspec = true,
                _ => {}
            }
        }
        info.has_any_lockfile = !info.has_cucumber && !info.has_rspec;

        debug!("Lockfile scan: {:?}", info);
        info
    }

    pub fn kind(&self) -> LockfileKind {
        if self.has_cucumber {
            LockfileKind::CucumberLocked
        } else if self.has_rspec {
            LockfileKind::RSpecLocked
        } else if self.has_any_lockfile {
            LockfileKind::PlainLocked
        } else {
            LockfileKind::NoLockfile
        }
    }
}

/// Classify lockfile text in one step
pub fn classify(text: Option<&str>) -> LockfileKind {
    LockfileInfo::parse(text).kind()
}
