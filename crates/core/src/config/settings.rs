use crate::{
    error::{Error, Result},
    lockfile::DEFAULT_LOCKFILE,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Files looked for, in order, in each directory from the project root up
pub const CONFIG_FILE_NAMES: [&str; 2] = [".runspec.json", "runspec.json"];

/// When an executable `script/test` replaces the resolved command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptOverride {
    /// Always use `script/test` when present
    #[default]
    Always,
    /// Use `script/test` unless the lockfile pins RSpec or Cucumber
    UnlessLocked,
    /// Ignore `script/test`
    Never,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    #[serde(default)]
    pub script_override: ScriptOverride,

    /// Lockfile to scan, relative to the project root
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lockfile: Option<String>,

    /// Arguments placed between the runner and the spec path
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_args: Vec<String>,

    /// Environment for executed commands
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<String, String>,
}

impl Config {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse {}: {e}", path.display())))?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            for name in CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.is_file() {
                    return Some(config_path);
                }
            }

            current = current.parent()?;
        }
    }

    /// Load the nearest config above `project_root`, or the defaults
    pub fn load_for_root(project_root: &Path) -> Result<Self> {
        match Self::find_config_file(project_root) {
            Some(path) => {
                debug!("Loading config from {:?}", path);
                Self::load_from_file(&path)
            }
            None => {
                debug!("No config found above {:?}, using defaults", project_root);
                Ok(Self::default())
            }
        }
    }

    pub fn lockfile_path(&self) -> &Path {
        Path::new(self.lockfile.as_deref().unwrap_or(DEFAULT_LOCKFILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_serialization() {
        let config = Config {
            script_override: ScriptOverride::UnlessLocked,
            lockfile: Some("gems.locked".to_string()),
            extra_args: vec!["--format".to_string(), "documentation".to_string()],
            env: BTreeMap::from([("RAILS_ENV".to_string(), "test".to_string())]),
        };

        let json = serde_json::to_string_pretty(&config).unwrap();
        assert!(json.contains("\"script_override\": \"unless_locked\""));

        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.script_override, ScriptOverride::Always);
        assert_eq!(config.lockfile_path(), Path::new("Gemfile.lock"));
    }

    #[test]
    fn test_find_config_walks_up() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("engines/billing");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            temp_dir.path().join(".runspec.json"),
            r#"{"script_override": "never"}"#,
        )
        .unwrap();

        let config = Config::load_for_root(&nested).unwrap();
        assert_eq!(config.script_override, ScriptOverride::Never);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("runspec.json"),
            r#"{"script_override": "sometimes"}"#,
        )
        .unwrap();

        let err = Config::load_for_root(temp_dir.path()).unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".runspec.json");
        let config = Config {
            extra_args: vec!["--fail-fast".to_string()],
            ..Default::default()
        };

        config.save_to_file(&path).unwrap();
        assert_eq!(Config::load_from_file(&path).unwrap(), config);
    }
}
