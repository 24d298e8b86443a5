use anyhow::{Context, Result};
use runspec_core::SpecRunner;
use std::path::Path;
use tracing::debug;

use crate::display::{
    describe_kind, describe_lockfile, describe_script_override, print_command_breakdown,
};
use crate::utils::parse_filepath_with_line;

pub fn analyze_command(root: &Path, filepath_arg: &str, verbose: bool) -> Result<()> {
    debug!("Analyzing file: {}", filepath_arg);

    let (filepath, line) = parse_filepath_with_line(filepath_arg);
    let runner = SpecRunner::new(root)
        .with_context(|| format!("Failed to open project at {}", root.display()))?;
    let path = Path::new(&filepath);
    let analysis = runner.analyze(path, line);

    if verbose {
        // Show JSON output for verbose mode
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    println!("🔍 Analyzing: {}", analysis.file.display());
    println!("{}", "=".repeat(80));
    println!("📁 Project: {}", runner.project_root().display());
    println!("📄 Kind: {}", describe_kind(analysis.kind));
    println!("🧪 Spec: {}", analysis.spec_path.display());
    println!("🎯 Target: {}", analysis.target_path.display());
    println!("🔒 Lockfile: {}", describe_lockfile(analysis.lockfile));
    println!(
        "⚙️  script/test: {}",
        describe_script_override(runner.config().script_override)
    );
    println!();

    print_command_breakdown(&runner.run_command(path, line));

    println!();
    println!("▶️  Run: {}", analysis.run);

    Ok(())
}
