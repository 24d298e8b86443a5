use anyhow::{Context, Result};
use std::{fs, path::Path};
use tracing::info;

use runspec_core::config::CONFIG_FILE_NAMES;

/// Default `.runspec.json`, listing every setting
pub fn create_default_config() -> String {
    let config = serde_json::json!({
        "script_override": "always",
        "lockfile": "Gemfile.lock",
        "extra_args": [],
        "env": {}
    });

    serde_json::to_string_pretty(&config).unwrap_or_default()
}

/// Write the default config into `cwd`, falling back to the global project root
pub fn init_command(root: &Path, cwd: Option<&str>, force: bool) -> Result<()> {
    let project_root = cwd.map(Path::new).unwrap_or(root);

    let project_root = project_root
        .canonicalize()
        .context("Failed to canonicalize project root")?;

    let config_path = project_root.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        println!("❌ Config already exists at: {}", config_path.display());
        println!("   Use --force to overwrite");
        return Ok(());
    }

    fs::write(&config_path, create_default_config())
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;
    info!("Wrote {}", config_path.display());

    println!("✅ Created config: {}", config_path.display());
    println!("\n📌 Settings:");
    println!("   • script_override: always | unless_locked | never");
    println!("   • lockfile: lockfile scanned for rspec/cucumber");
    println!("   • extra_args: arguments placed before the spec path");
    println!("   • env: environment for `runspec run`");

    Ok(())
}
