//! MD5 content hashes for sound data and release identification.

use std::fmt;
use std::fs::File;
use std::io;
use std::path::Path;

use md5::{Digest, Md5};
use serde::{Serialize, Serializer};

use crate::error::Result;

/// 128-bit MD5 digest of a byte sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentHash([u8; 16]);

impl ContentHash {
    /// Hashes a byte slice.
    pub fn of(bytes: &[u8]) -> Self {
        Self::from_digest(&Md5::digest(bytes))
    }

    fn from_digest(digest: &[u8]) -> Self {
        let mut out = [0u8; 16];
        out.copy_from_slice(digest);
        Self(out)
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Lowercase hex representation, e.g. `d41d8cd98f00b204e9800998ecf8427e`.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for ContentHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Hashes the contents of a file without loading it into memory at once.
pub fn hash_file<P: AsRef<Path>>(path: P) -> Result<ContentHash> {
    let mut file = File::open(path)?;
    let mut hasher = Md5::new();
    io::copy(&mut file, &mut hasher)?;
    Ok(ContentHash::from_digest(&hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_digest() {
        assert_eq!(
            ContentHash::of(&[]).to_string(),
            "d41d8cd98f00b204e9800998ecf8427e"
        );
    }

    #[test]
    fn test_known_digest() {
        assert_eq!(
            ContentHash::of(b"abc").to_hex(),
            "900150983cd24fb0d6963f7d28e17f72"
        );
    }

    #[test]
    fn test_serializes_as_hex_string() {
        let json = serde_json::to_string(&ContentHash::of(b"abc")).unwrap();
        assert_eq!(json, "\"900150983cd24fb0d6963f7d28e17f72\"");
    }

    #[test]
    fn test_hash_file_matches_buffer_hash() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"The quick brown fox").unwrap();
        file.flush().unwrap();

        let from_file = hash_file(file.path()).unwrap();
        assert_eq!(from_file, ContentHash::of(b"The quick brown fox"));
    }

    #[test]
    fn test_hash_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(hash_file(dir.path().join("missing.bin")).is_err());
    }
}
