//! Decoder configuration.
//!
//! This module contains:
//! - `TextEncoding` - the single-byte code page used to decode stored text
//! - `LangOptions` / `SfxOptions` - per-format decode options
//! - Binary layout constants for both container formats

use encoding_rs::{Encoding, WINDOWS_1252};
use tracing::debug;

use crate::error::{Error, Result};

/// LANG.DAT layout.
pub mod lang_layout {
    /// Size of one address-table slot (u32).
    pub const SLOT_SIZE: usize = 4;
}

/// SFX layout.
///
/// Header fields are u32 little-endian at fixed positions after the magic tag.
pub mod sfx_layout {
    pub const HEADER_SIZE: usize = 28;
    pub const RESERVED_OFFSET: usize = 4;
    pub const SOUND_DATA_OFFSET: usize = 8;
    pub const SOUND_PLUS_TRAILING_SIZE: usize = 12;
    pub const SOUND_DATA_SIZE: usize = 16;
    pub const NAMES_OFFSET: usize = 20;
    pub const NAMES_SIZE: usize = 24;

    /// Size of one sound descriptor: data address, data size, id.
    pub const DESCRIPTOR_SIZE: usize = 12;
}

/// Single-byte text encoding used for strings stored in the game files.
///
/// Labels are resolved with the WHATWG rules, so `"us-ascii"` selects
/// windows-1252 the way a browser `TextDecoder` would. Only single-byte
/// encodings are accepted: every byte maps to exactly one char, so decoding
/// can never fail or merge bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextEncoding(&'static Encoding);

impl TextEncoding {
    pub const DEFAULT_LABEL: &'static str = "us-ascii";

    /// Resolves an encoding label such as `"us-ascii"`, `"ibm866"` or `"latin2"`.
    pub fn for_label(label: &str) -> Result<Self> {
        let encoding = Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| Error::UnsupportedEncoding(label.to_string()))?;

        if !encoding.is_single_byte() {
            return Err(Error::UnsupportedEncoding(format!(
                "{} is not a single-byte encoding",
                encoding.name()
            )));
        }

        Ok(Self(encoding))
    }

    /// Canonical name of the resolved encoding.
    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    /// Decodes raw bytes to a `String`.
    ///
    /// Bytes the encoding leaves unmapped become the char with the same code
    /// point, so every input byte yields exactly one char.
    pub fn decode(&self, bytes: &[u8]) -> String {
        let (decoded, had_errors) = self.0.decode_without_bom_handling(bytes);
        if !had_errors {
            return decoded.into_owned();
        }

        debug!(
            "{} leaves some bytes unmapped: {:?}",
            self.name(),
            &bytes[..bytes.len().min(20)]
        );
        bytes.iter().map(|&b| self.decode_byte(b)).collect()
    }

    fn decode_byte(&self, byte: u8) -> char {
        let buf = [byte];
        let (decoded, had_errors) = self.0.decode_without_bom_handling(&buf);
        match decoded.chars().next() {
            Some(c) if !had_errors => c,
            _ => char::from(byte),
        }
    }
}

impl Default for TextEncoding {
    fn default() -> Self {
        Self(WINDOWS_1252)
    }
}

/// Options for decoding a LANG.DAT string table.
#[derive(Debug, Clone, Copy, Default)]
pub struct LangOptions {
    pub encoding: TextEncoding,
}

impl LangOptions {
    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }
}

/// Options for decoding an SFX sound bank.
#[derive(Debug, Clone, Copy, Default)]
pub struct SfxOptions {
    /// Encoding of the short and long sound names
    pub encoding: TextEncoding,
    /// Check the `0XFS` magic tag before decoding
    pub verify_magic: bool,
    /// Fail instead of returning partial sound objects when the sound and
    /// name tables disagree
    pub strict_counts: bool,
}

impl SfxOptions {
    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn with_verify_magic(mut self, verify_magic: bool) -> Self {
        self.verify_magic = verify_magic;
        self
    }

    pub fn with_strict_counts(mut self, strict_counts: bool) -> Self {
        self.strict_counts = strict_counts;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_label_matches_default() {
        let resolved = TextEncoding::for_label(TextEncoding::DEFAULT_LABEL).unwrap();
        assert_eq!(resolved, TextEncoding::default());
        assert_eq!(resolved.name(), "windows-1252");
    }

    #[test]
    fn test_label_is_trimmed_and_case_insensitive() {
        let resolved = TextEncoding::for_label("  ISO-8859-2 ").unwrap();
        assert_eq!(resolved.name(), "ISO-8859-2");
    }

    #[test]
    fn test_multi_byte_encoding_rejected() {
        assert!(matches!(
            TextEncoding::for_label("shift_jis"),
            Err(Error::UnsupportedEncoding(_))
        ));
        assert!(matches!(
            TextEncoding::for_label("utf-8"),
            Err(Error::UnsupportedEncoding(_))
        ));
    }

    #[test]
    fn test_unknown_label_rejected() {
        match TextEncoding::for_label("klingon") {
            Err(Error::UnsupportedEncoding(label)) => assert_eq!(label, "klingon"),
            other => panic!("expected UnsupportedEncoding, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_every_byte_value() {
        let bytes: Vec<u8> = (1..=255).collect();
        let decoded = TextEncoding::default().decode(&bytes);
        assert_eq!(decoded.chars().count(), 255);
    }

    #[test]
    fn test_decode_high_bytes() {
        let decoded = TextEncoding::default().decode(&[0x43, 0x61, 0x66, 0xE9]);
        assert_eq!(decoded, "Café");
    }

    #[test]
    fn test_unmapped_byte_passes_through() {
        // 0xA5 has no ISO-8859-3 mapping
        let encoding = TextEncoding::for_label("iso-8859-3").unwrap();
        assert_eq!(encoding.decode(&[0xA5]), "\u{a5}");
        assert_eq!(encoding.decode(&[0x41, 0xA5, 0xA1]), "A\u{a5}Ħ");
    }

    #[test]
    fn test_sfx_options_builder() {
        let options = SfxOptions::default()
            .with_verify_magic(true)
            .with_strict_counts(true);
        assert!(options.verify_magic);
        assert!(options.strict_counts);
        assert_eq!(options.encoding, TextEncoding::default());
    }
}
