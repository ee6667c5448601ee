//! Identification of game binaries by checksum.

mod releases;

pub use releases::*;

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::hash::{ContentHash, hash_file};

/// Identity of a game binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentityData {
    pub is_known_version: bool,
    /// Base name of the file
    pub file: String,
    pub game: Option<String>,
    pub identity: Option<String>,
    pub qa: Option<String>,
    pub compilation: Option<String>,
    pub adventure: Option<String>,
    pub md5: ContentHash,
    pub size: u64,
    /// Release key, e.g. `UK_RETAIL`
    #[serde(rename = "type")]
    pub release: Option<String>,
}

impl IdentityData {
    fn new(file: String, md5: ContentHash, size: u64) -> Self {
        let release = release_for_checksum(&md5.to_hex());
        debug!("{} ({}) -> {:?}", file, md5, release.map(|r| r.key));

        Self {
            is_known_version: release.is_some(),
            file,
            game: release.map(|r| r.game.to_string()),
            identity: release.map(|r| r.identity.to_string()),
            qa: release.and_then(|r| r.qa).map(str::to_string),
            compilation: release.map(|r| r.compilation.to_string()),
            adventure: release.map(|r| r.adventure.to_string()),
            md5,
            size,
            release: release.map(|r| r.key.to_string()),
        }
    }
}

/// Identifies a binary on disk.
///
/// The path must point at a regular file; symlinks are not followed.
pub fn identify_file<P: AsRef<Path>>(path: P) -> Result<IdentityData> {
    let path = path.as_ref();
    let metadata = fs::symlink_metadata(path)?;
    if !metadata.is_file() {
        return Err(Error::NotAFile(path.to_path_buf()));
    }

    let md5 = hash_file(path)?;
    let file = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(IdentityData::new(file, md5, metadata.len()))
}

/// Identifies an in-memory copy of a binary.
pub fn identify_bytes(file: &str, bytes: &[u8]) -> IdentityData {
    IdentityData::new(file.to_string(), ContentHash::of(bytes), bytes.len() as u64)
}
