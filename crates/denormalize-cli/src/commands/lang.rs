//! Language string extraction command.

use std::path::Path;

use anyhow::{Context, Result};
use denormalize_core::export::{format_lang_console, to_json};
use denormalize_core::{LangOptions, unpack_lang};
use tracing::info;

/// Run the language string extraction
pub fn run(path: &Path, options: &LangOptions, json: bool, color: bool) -> Result<()> {
    let data = super::load_file(path)?;
    let result = unpack_lang(&data, options)
        .with_context(|| format!("Failed to unpack language strings from {}", path.display()))?;

    info!(
        "{}: {} strings ({} orphaned) using {}",
        path.display(),
        result.string_count(),
        result.orphan_strings.len(),
        options.encoding.name()
    );

    if json {
        println!("{}", to_json(&result)?);
    } else {
        print!("{}", format_lang_console(&result, color));
    }

    Ok(())
}
