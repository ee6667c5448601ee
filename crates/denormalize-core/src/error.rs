use std::path::PathBuf;

use thiserror::Error;

use crate::binary::FileKind;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Read of {width} bytes at offset {offset:#x} exceeds buffer length {len}")]
    OutOfBounds {
        offset: usize,
        width: usize,
        len: usize,
    },

    #[error("Reached end of data while scanning from offset {offset:#x}")]
    TruncatedData { offset: usize },

    #[error("Not a valid {} file; need {:?} magic number, got: {actual:?}", .expected.as_upper(), .expected.magic().unwrap_or("????"))]
    FormatMismatch { expected: FileKind, actual: String },

    #[error("Sound/name count mismatch: {sounds} sound descriptors, {names} name records, {unmatched} unmatched ids")]
    InconsistentCount {
        sounds: usize,
        names: usize,
        unmatched: usize,
    },

    #[error("Unsupported text encoding: {0}")]
    UnsupportedEncoding(String),

    #[error("Given path does not point to a file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
