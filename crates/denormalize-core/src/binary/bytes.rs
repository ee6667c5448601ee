//! Byte buffer utilities for parsing the game's binary containers.
//!
//! This module provides `ByteBuffer`, a bounds-checked little-endian reader over
//! a caller-owned byte slice. It supports both absolute reads at an offset and
//! sequential reads from a tracked position.

use crate::error::{Error, Result};

/// A position-tracking byte reader for parsing binary data structures.
///
/// All multi-byte reads are unsigned little-endian. Every read checks that
/// `offset + width` fits inside the buffer and fails with
/// [`Error::OutOfBounds`] otherwise; nothing is ever read past the end.
///
/// # Example
///
/// ```
/// use denormalize_core::binary::ByteBuffer;
///
/// let data = [0x78, 0x56, 0x34, 0x12, 0x00, 0x00, 0x00, 0x00];
/// let mut buf = ByteBuffer::new(&data);
///
/// let value = buf.read_u32().unwrap();
/// assert_eq!(value, 0x12345678);
/// assert_eq!(buf.position(), 4);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ByteBuffer<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteBuffer<'a> {
    /// Creates a new `ByteBuffer` wrapping the given byte slice.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Creates a `ByteBuffer` positioned at `pos`.
    pub fn at(data: &'a [u8], pos: usize) -> Result<Self> {
        let mut buf = Self::new(data);
        buf.set_position(pos)?;
        Ok(buf)
    }

    /// Returns the current read position.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the total length of the underlying buffer.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of bytes remaining from the current position.
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Returns true once the position has reached the end of the buffer.
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Sets the current read position.
    ///
    /// # Errors
    ///
    /// Returns an error if the position is beyond the buffer length.
    pub fn set_position(&mut self, pos: usize) -> Result<()> {
        if pos > self.data.len() {
            return Err(self.out_of_bounds(pos, 0));
        }
        self.pos = pos;
        Ok(())
    }

    /// Skips the specified number of bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if skipping would go beyond the buffer length.
    pub fn skip(&mut self, count: usize) -> Result<()> {
        let target = self
            .pos
            .checked_add(count)
            .ok_or_else(|| self.out_of_bounds(self.pos, count))?;
        self.set_position(target)
    }

    /// Returns a slice of bytes at the specified offset without advancing position.
    ///
    /// # Errors
    ///
    /// Returns an error if the range is out of bounds.
    pub fn slice_at(&self, offset: usize, len: usize) -> Result<&'a [u8]> {
        let end = offset
            .checked_add(len)
            .ok_or_else(|| self.out_of_bounds(offset, len))?;

        if end > self.data.len() {
            return Err(self.out_of_bounds(offset, len));
        }

        Ok(&self.data[offset..end])
    }

    /// Reads an unsigned 8-bit integer at the specified offset.
    pub fn read_u8_at(&self, offset: usize) -> Result<u8> {
        let bytes = self.slice_at(offset, 1)?;
        Ok(bytes[0])
    }

    /// Reads an unsigned 16-bit integer (little-endian) at the specified offset.
    pub fn read_u16_at(&self, offset: usize) -> Result<u16> {
        let bytes = self.slice_at(offset, 2)?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    /// Reads an unsigned 32-bit integer (little-endian) at the specified offset.
    pub fn read_u32_at(&self, offset: usize) -> Result<u32> {
        let bytes = self.slice_at(offset, 4)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Reads the specified number of bytes and advances the position.
    ///
    /// # Errors
    ///
    /// Returns an error if there are not enough bytes remaining.
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8]> {
        let result = self.slice_at(self.pos, count)?;
        self.pos += count;
        Ok(result)
    }

    /// Reads an unsigned 8-bit integer and advances the position.
    pub fn read_u8(&mut self) -> Result<u8> {
        let value = self.read_u8_at(self.pos)?;
        self.pos += 1;
        Ok(value)
    }

    /// Reads an unsigned 16-bit integer (little-endian) and advances the position.
    pub fn read_u16(&mut self) -> Result<u16> {
        let value = self.read_u16_at(self.pos)?;
        self.pos += 2;
        Ok(value)
    }

    /// Reads an unsigned 32-bit integer (little-endian) and advances the position.
    pub fn read_u32(&mut self) -> Result<u32> {
        let value = self.read_u32_at(self.pos)?;
        self.pos += 4;
        Ok(value)
    }

    /// Reads a run of non-zero bytes and advances past its `0x00` terminator.
    ///
    /// The returned slice excludes the terminator and may be empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TruncatedData`] if the buffer ends before a terminator
    /// is found, including when the position is already at the end.
    pub fn read_null_terminated(&mut self) -> Result<&'a [u8]> {
        let start = self.pos;
        let rest = self.data.get(start..).unwrap_or_default();
        let len = rest
            .iter()
            .position(|&b| b == 0)
            .ok_or(Error::TruncatedData { offset: start })?;

        self.pos = start + len + 1;
        Ok(&rest[..len])
    }

    fn out_of_bounds(&self, offset: usize, width: usize) -> Error {
        Error::OutOfBounds {
            offset,
            width,
            len: self.data.len(),
        }
    }
}
