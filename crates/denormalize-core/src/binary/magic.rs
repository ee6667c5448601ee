//! Magic number detection for the game's container files.

use serde::Serialize;
use strum::{Display, EnumString};

use super::ByteBuffer;
use crate::error::{Error, Result};

/// Length of the leading magic tag.
pub const MAGIC_LEN: usize = 4;

/// Container formats this crate understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// Sound effect bank (`*.SFX`)
    Sfx,
    /// Language string table (`LANG.DAT`); carries no magic tag
    Lang,
}

/// Known magic tags and the format each one identifies.
const KNOWN_MAGIC: &[(&str, FileKind)] = &[("0XFS", FileKind::Sfx)];

impl FileKind {
    /// The magic tag for this format, if it has one.
    pub fn magic(&self) -> Option<&'static str> {
        KNOWN_MAGIC
            .iter()
            .find(|(_, kind)| kind == self)
            .map(|(magic, _)| *magic)
    }

    /// Looks up the format a magic tag identifies.
    pub fn from_magic(magic: &str) -> Option<Self> {
        KNOWN_MAGIC
            .iter()
            .find(|(known, _)| *known == magic)
            .map(|(_, kind)| *kind)
    }

    /// Upper-case name used in error messages.
    pub fn as_upper(&self) -> &'static str {
        match self {
            Self::Sfx => "SFX",
            Self::Lang => "LANG",
        }
    }
}

/// Returns the magic tag at the start of a buffer.
///
/// Each byte maps to the char with the same code point, so non-ASCII bytes
/// pass through instead of failing.
pub fn read_magic(buffer: &[u8]) -> Result<String> {
    let bytes = ByteBuffer::new(buffer).slice_at(0, MAGIC_LEN)?;
    Ok(bytes.iter().map(|&b| char::from(b)).collect())
}

/// Verifies that a buffer's magic tag identifies the expected format.
pub fn verify_magic(buffer: &[u8], expected: FileKind) -> Result<()> {
    let magic = read_magic(buffer)?;
    match FileKind::from_magic(&magic) {
        Some(kind) if kind == expected => Ok(()),
        _ => Err(Error::FormatMismatch {
            expected,
            actual: magic,
        }),
    }
}
