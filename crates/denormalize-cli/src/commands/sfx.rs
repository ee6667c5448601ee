//! Sound effect extraction command.

use std::path::Path;

use anyhow::{Context, Result};
use denormalize_core::export::{format_sfx_console, to_json};
use denormalize_core::{SfxOptions, unpack_sfx};
use tracing::{info, warn};

/// Run the sound effect extraction
pub fn run(path: &Path, options: &SfxOptions, json: bool, color: bool) -> Result<()> {
    let data = super::load_file(path)?;
    let result = unpack_sfx(&data, options)
        .with_context(|| format!("Failed to unpack sound effects from {}", path.display()))?;

    let partial = result
        .sound_objects
        .iter()
        .filter(|sound| !sound.is_complete())
        .count();
    if partial > 0 {
        warn!(
            "{}: {} sounds could not be matched with a name",
            path.display(),
            partial
        );
    }
    info!("{}: {} sounds", path.display(), result.sound_objects.len());

    if json {
        println!("{}", to_json(&result)?);
    } else {
        print!("{}", format_sfx_console(&result, color));
    }

    Ok(())
}
