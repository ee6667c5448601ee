//! CLI command implementations.
//!
//! Each module handles one of the actions selectable from the command line.

pub mod identify;
pub mod lang;
pub mod sfx;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// Read a whole game file into memory.
fn load_file(path: &Path) -> Result<Vec<u8>> {
    let data = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    debug!("Loaded {} ({} bytes)", path.display(), data.len());
    Ok(data)
}
