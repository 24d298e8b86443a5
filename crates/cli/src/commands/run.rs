use anyhow::{Context, Result};
use runspec_core::SpecRunner;
use std::path::Path;
use tracing::{debug, info};

use crate::utils::parse_filepath_with_line;

pub fn run_command(root: &Path, filepath_arg: &str, dry_run: bool) -> Result<()> {
    // Parse filepath and line number
    let (filepath, line) = parse_filepath_with_line(filepath_arg);

    debug!("Running spec for: {} at line: {:?}", filepath, line);

    let runner = SpecRunner::new(root)
        .with_context(|| format!("Failed to open project at {}", root.display()))?;
    let command = runner.run_command(Path::new(&filepath), line);

    if dry_run {
        println!("{}", command.to_shell_command());
        if let Some(ref dir) = command.working_dir {
            println!("Working directory: {}", dir);
        }
        if !command.env.is_empty() {
            println!("Environment variables:");
            for (key, value) in &command.env {
                println!("  {}={}", key, value);
            }
        }
    } else {
        let shell_cmd = command.to_shell_command();
        info!("Running: {}", shell_cmd);
        if let Some(ref dir) = command.working_dir {
            info!("Working directory: {}", dir);
        }

        let status = command
            .execute()
            .with_context(|| format!("Failed to execute: {}", shell_cmd))?;

        if !status.success() {
            std::process::exit(status.code().unwrap_or(1));
        }
    }

    Ok(())
}
