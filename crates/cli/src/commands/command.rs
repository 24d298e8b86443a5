use anyhow::{Context, Result};
use runspec_core::SpecRunner;
use std::path::Path;
use tracing::debug;

use crate::utils::parse_filepath_with_line;

/// Print the runner for a file's spec, without the spec path
pub fn resolve_command(root: &Path, filepath_arg: &str) -> Result<()> {
    let (filepath, _) = parse_filepath_with_line(filepath_arg);

    let runner = SpecRunner::new(root)
        .with_context(|| format!("Failed to open project at {}", root.display()))?;
    let spec_path = runner.spec_path(Path::new(&filepath));
    debug!("Spec for {}: {:?}", filepath, spec_path);

    println!("{}", runner.command(&spec_path).base_command());
    Ok(())
}
