//! Low-level binary access shared by the format decoders.

mod bytes;
pub mod magic;

pub use bytes::ByteBuffer;
pub use magic::{FileKind, read_magic, verify_magic};
