use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{
    analyze_command, init_command, path_command, resolve_command, run_command, PathQuery,
};

#[derive(Parser, Debug)]
#[command(name = "runspec")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    /// Project root; relative file paths are read from here (defaults to the current directory)
    #[arg(short, long, global = true)]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the spec, test or feature for a file
    #[command(visible_alias = "s")]
    Spec {
        /// Path to the source file
        filepath: String,
    },
    /// Print the file a spec, test or feature exercises
    #[command(visible_alias = "t")]
    Target {
        /// Path to the spec file
        filepath: String,
    },
    /// Print the spec for a source file, or the source for a spec
    #[command(visible_alias = "alt")]
    Alternate {
        /// Path to a source or spec file
        filepath: String,
    },
    /// Print the command that runs the spec for a file
    #[command(visible_alias = "c")]
    Command {
        /// Path to a source or spec file
        filepath: String,
    },
    /// Run the spec for a file
    #[command(visible_alias = "r")]
    Run {
        /// Path to a source or spec file with optional line number (e.g., spec/user_spec.rb:12)
        filepath: String,

        /// Print the command without executing it
        #[arg(short, long)]
        dry_run: bool,
    },
    /// Show how a file is resolved
    #[command(visible_alias = "a")]
    Analyze {
        /// Path to a source or spec file
        filepath: String,

        /// Print the analysis as JSON
        #[arg(short, long)]
        verbose: bool,
    },
    /// Write a default .runspec.json
    Init {
        /// Directory to write into, defaults to the project root
        #[arg(short, long)]
        cwd: Option<String>,

        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        let root = match self.root {
            Some(root) => root,
            None => std::env::current_dir().context("Failed to get current directory")?,
        };

        match self.command {
            Commands::Spec { filepath } => path_command(&root, &filepath, PathQuery::Spec),
            Commands::Target { filepath } => path_command(&root, &filepath, PathQuery::Target),
            Commands::Alternate { filepath } => {
                path_command(&root, &filepath, PathQuery::Alternate)
            }
            Commands::Command { filepath } => resolve_command(&root, &filepath),
            Commands::Run { filepath, dry_run } => run_command(&root, &filepath, dry_run),
            Commands::Analyze { filepath, verbose } => analyze_command(&root, &filepath, verbose),
            Commands::Init { cwd, force } => init_command(&root, cwd.as_deref(), force),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_run_with_global_root() {
        let cli = Cli::parse_from(["runspec", "run", "spec/foo_spec.rb:3", "--dry-run", "--root", "/p"]);

        assert_eq!(cli.root, Some(PathBuf::from("/p")));
        match cli.command {
            Commands::Run { filepath, dry_run } => {
                assert_eq!(filepath, "spec/foo_spec.rb:3");
                assert!(dry_run);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
