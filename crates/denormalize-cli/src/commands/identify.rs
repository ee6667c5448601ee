//! Identify command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use denormalize_core::export::{format_identity, to_json};
use denormalize_core::identify_file;

/// Run the identify command
pub fn run(path: &Path, json: bool) -> Result<()> {
    let identity = identify_file(path)
        .with_context(|| format!("Failed to identify {}", path.display()))?;

    if json {
        println!("{}", to_json(&identity)?);
    } else {
        println!("{}", format_identity(&identity));
    }

    Ok(())
}
