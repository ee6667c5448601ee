//! # denormalize-core
//!
//! Extraction of game data from Normality's binary container files.
//!
//! - `LANG.DAT` string tables: [`unpack_lang`]
//! - `.SFX` sound banks: [`unpack_sfx`]
//! - release identification by checksum: [`identify_file`]
//!
//! Decoders work on a fully loaded byte buffer and return owned results; they
//! keep no state between calls.
//!
//! ```
//! use denormalize_core::{LangOptions, unpack_lang};
//!
//! // one slot pointing at offset 4, then the string "Hi"
//! let data = [4, 0, 0, 0, b'H', b'i', 0];
//! let result = unpack_lang(&data, &LangOptions::default()).unwrap();
//! assert_eq!(result.indexed_strings[0].text, "Hi");
//! ```

pub mod binary;
pub mod config;
pub mod error;
pub mod export;
pub mod format;
pub mod hash;
pub mod identify;

// Buffer builder for tests (always available for unit and integration tests)
#[doc(hidden)]
pub mod mock;

pub use binary::{ByteBuffer, FileKind, read_magic, verify_magic};
pub use config::{LangOptions, SfxOptions, TextEncoding};
pub use error::{Error, Result};
pub use format::{
    LangDecodeResult, SfxDecodeResult, SfxHeader, SoundObject, StringRecord, unpack_lang,
    unpack_sfx,
};
pub use hash::ContentHash;
pub use identify::{IdentityData, identify_bytes, identify_file};
