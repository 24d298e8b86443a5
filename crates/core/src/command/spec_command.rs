use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandType {
    Script,     // script/test
    Ruby,       // ruby with load path or bundler flags
    Binstub,    // bin/rspec, bin/cucumber
    BundleExec, // bundle exec <runner>
    Runner,     // a runner on PATH, e.g. cucumber
}

/// A resolved invocation, optionally bound to the spec it runs
#[derive(Debug, Clone, PartialEq)]
pub struct SpecCommand {
    pub command_type: CommandType,
    pub program: String,
    pub args: Vec<String>,
    pub spec_path: Option<String>,
    pub working_dir: Option<String>,
    pub env: Vec<(String, String)>,
}

impl SpecCommand {
    fn with_type(command_type: CommandType, program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command_type,
            program: program.into(),
            args,
            spec_path: None,
            working_dir: None,
            env: Vec::new(),
        }
    }

    pub fn script(path: impl Into<String>) -> Self {
        Self::with_type(CommandType::Script, path, Vec::new())
    }

    pub fn ruby(args: Vec<String>) -> Self {
        Self::with_type(CommandType::Ruby, "ruby", args)
    }

    pub fn binstub(path: impl Into<String>) -> Self {
        Self::with_type(CommandType::Binstub, path, Vec::new())
    }

    pub fn bundle_exec(runner: &str) -> Self {
        Self::with_type(
            CommandType::BundleExec,
            "bundle",
            vec!["exec".to_string(), runner.to_string()],
        )
    }

    pub fn runner(runner: impl Into<String>) -> Self {
        Self::with_type(CommandType::Runner, runner, Vec::new())
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn with_spec_path(mut self, spec_path: String) -> Self {
        self.spec_path = Some(spec_path);
        self
    }

    pub fn with_working_dir(mut self, dir: String) -> Self {
        self.working_dir = Some(dir);
        self
    }

    pub fn with_env(mut self, key: String, value: String) -> Self {
        self.env.push((key, value));
        self
    }

    /// Whether the runner understands `path:LINE` arguments
    pub fn accepts_line_numbers(&self) -> bool {
        matches!(
            self.command_type,
            CommandType::Binstub | CommandType::BundleExec | CommandType::Runner
        )
    }

    /// The command without the spec path, e.g. `ruby -Ilib -Ispec`
    pub fn base_command(&self) -> String {
        std::iter::once(&self.program)
            .chain(&self.args)
            .map(|arg| quote(arg))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn to_shell_command(&self) -> String {
        let mut cmd = self.base_command();
        if let Some(ref spec_path) = self.spec_path {
            cmd.push(' ');
            cmd.push_str(&quote(spec_path));
        }
        cmd
    }

    pub fn execute(&self) -> io::Result<ExitStatus> {
        // Project-relative programs (script/test, bin/rspec) live under the working directory
        let program = match self.working_dir {
            Some(ref dir) if self.program.contains('/') && Path::new(&self.program).is_relative() => {
                Path::new(dir).join(&self.program)
            }
            _ => PathBuf::from(&self.program),
        };

        let mut command = Command::new(program);
        command.args(&self.args);

        if let Some(ref spec_path) = self.spec_path {
            command.arg(spec_path);
        }

        // Set working directory if specified
        if let Some(ref dir) = self.working_dir {
            command.current_dir(dir);
        }

        for (key, value) in &self.env {
            command.env(key, value);
        }

        command.status()
    }
}

fn quote(arg: &str) -> String {
    if arg.contains(' ') {
        format!("'{arg}'")
    } else {
        arg.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_command() {
        let cmd = SpecCommand::ruby(vec!["-Ilib".to_string(), "-Ispec".to_string()]);
        assert_eq!(cmd.base_command(), "ruby -Ilib -Ispec");
        assert_eq!(cmd.to_shell_command(), "ruby -Ilib -Ispec");
    }

    #[test]
    fn test_shell_command_appends_spec_path() {
        let cmd = SpecCommand::bundle_exec("rspec").with_spec_path("spec/models/user_spec.rb".to_string());
        assert_eq!(cmd.base_command(), "bundle exec rspec");
        assert_eq!(cmd.to_shell_command(), "bundle exec rspec spec/models/user_spec.rb");
    }

    #[test]
    fn test_arguments_with_spaces_are_quoted() {
        let cmd = SpecCommand::binstub("bin/rspec")
            .with_args(["--tag", "slow tests"])
            .with_spec_path("spec/my file_spec.rb".to_string());
        assert_eq!(
            cmd.to_shell_command(),
            "bin/rspec --tag 'slow tests' 'spec/my file_spec.rb'"
        );
    }

    #[test]
    fn test_accepts_line_numbers() {
        assert!(SpecCommand::binstub("bin/rspec").accepts_line_numbers());
        assert!(SpecCommand::bundle_exec("cucumber").accepts_line_numbers());
        assert!(SpecCommand::runner("cucumber").accepts_line_numbers());
        assert!(!SpecCommand::ruby(Vec::new()).accepts_line_numbers());
        assert!(!SpecCommand::script("script/test").accepts_line_numbers());
    }

    #[cfg(unix)]
    #[test]
    fn test_execute_reports_status() {
        let status = SpecCommand::runner("sh")
            .with_args(["-c", "exit \"$RUNSPEC_CODE\""])
            .with_env("RUNSPEC_CODE".to_string(), "3".to_string())
            .execute()
            .unwrap();
        assert_eq!(status.code(), Some(3));
    }
}
