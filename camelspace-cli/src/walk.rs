use anyhow::{Context, Result};
use camelspace_core::{walk, OutputFormatter, WalkOptions};
use std::path::Path;

use crate::OutputFormat;

pub fn handle_walk(
    directory: Option<&Path>,
    options: &WalkOptions,
    output: OutputFormat,
    use_color: bool,
) -> Result<()> {
    let root = match directory {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir().context("Could not open current working directory")?,
    };

    let report = walk(&root, options)
        .with_context(|| format!("Could not rename files in {}", root.display()))?;

    println!("{}", report.format(output.into(), use_color).trim_end());
    Ok(())
}
