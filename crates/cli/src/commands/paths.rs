use anyhow::{Context, Result};
use runspec_core::SpecRunner;
use std::path::Path;
use tracing::debug;

use crate::utils::parse_filepath_with_line;

/// Which counterpart of a file to print
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathQuery {
    Spec,
    Target,
    Alternate,
}

pub fn path_command(root: &Path, filepath_arg: &str, query: PathQuery) -> Result<()> {
    let (filepath, _) = parse_filepath_with_line(filepath_arg);
    debug!("Resolving {:?} path for {}", query, filepath);

    let runner = SpecRunner::new(root)
        .with_context(|| format!("Failed to open project at {}", root.display()))?;
    let path = Path::new(&filepath);

    let resolved = match query {
        PathQuery::Spec => runner.spec_path(path),
        PathQuery::Target => runner.target_path(path),
        PathQuery::Alternate => runner.alternate_path(path),
    };

    println!("{}", resolved.display());
    Ok(())
}
