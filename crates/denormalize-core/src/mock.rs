//! Byte buffer builder for tests
//!
//! Provides a fluent API for laying out synthetic container files at fixed
//! offsets, so decoder tests can describe a file by its fields.

use encoding_rs::WINDOWS_1252;

/// Builder for creating test buffers
#[derive(Debug, Clone, Default)]
pub struct MockBufferBuilder {
    data: Vec<u8>,
}

impl MockBufferBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate buffer with zeros up to the specified size
    pub fn with_size(mut self, size: usize) -> Self {
        self.ensure_size(size);
        self
    }

    /// Current length of the buffer
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Write an unsigned 16-bit integer at the specified offset
    pub fn write_u16(mut self, offset: usize, value: u16) -> Self {
        self.ensure_size(offset + 2);
        self.data[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
        self
    }

    /// Write an unsigned 32-bit integer at the specified offset
    pub fn write_u32(mut self, offset: usize, value: u32) -> Self {
        self.ensure_size(offset + 4);
        self.data[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
        self
    }

    /// Write raw bytes at the specified offset
    pub fn write_bytes(mut self, offset: usize, bytes: &[u8]) -> Self {
        self.ensure_size(offset + bytes.len());
        self.data[offset..offset + bytes.len()].copy_from_slice(bytes);
        self
    }

    /// Write a null-terminated windows-1252 string at the specified offset
    pub fn write_cstr(mut self, offset: usize, text: &str) -> Self {
        let (encoded, _, _) = WINDOWS_1252.encode(text);
        let bytes = encoded.into_owned();
        self.ensure_size(offset + bytes.len() + 1);
        self.data[offset..offset + bytes.len()].copy_from_slice(&bytes);
        self.data[offset + bytes.len()] = 0;
        self
    }

    /// Append raw bytes at the end of the buffer
    pub fn append(mut self, bytes: &[u8]) -> Self {
        self.data.extend_from_slice(bytes);
        self
    }

    /// Build the buffer
    pub fn build(self) -> Vec<u8> {
        self.data
    }

    fn ensure_size(&mut self, size: usize) {
        if self.data.len() < size {
            self.data.resize(size, 0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_layout() {
        let data = MockBufferBuilder::new()
            .write_u32(0, 0x12345678)
            .write_u16(6, 0xBEEF)
            .write_cstr(8, "Hé")
            .build();

        assert_eq!(
            data,
            vec![0x78, 0x56, 0x34, 0x12, 0, 0, 0xEF, 0xBE, b'H', 0xE9, 0]
        );
    }

    #[test]
    fn test_builder_overwrite_keeps_length() {
        let builder = MockBufferBuilder::new().with_size(8).write_u16(2, 1);
        assert_eq!(builder.len(), 8);
    }
}
