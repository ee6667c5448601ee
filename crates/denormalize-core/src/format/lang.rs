//! LANG.DAT string table decoding.
//!
//! The file has two parts. It opens with a table of u32 string addresses, one
//! per slot, followed by the strings themselves, each terminated by a single
//! null byte. The first slot doubles as the pointer to the start of the string
//! region, which also fixes the size of the address table.
//!
//! Some slots are zero (unused), and some strings are not pointed at by any
//! slot ("orphans"). Both are kept in the result.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::binary::ByteBuffer;
use crate::config::{LangOptions, lang_layout};
use crate::error::{Error, Result};

/// One slot of the address table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AddressTableEntry {
    pub slot: u32,
    /// Byte offset of the string this slot points at; 0 means unused
    pub address: u32,
}

impl AddressTableEntry {
    pub fn is_used(&self) -> bool {
        self.address != 0
    }
}

/// Address → slot lookup built from the used slots of the address table.
#[derive(Debug, Clone, Default)]
pub struct AddressTable {
    by_address: HashMap<u32, u32>,
    used: Vec<AddressTableEntry>,
    unused: Vec<AddressTableEntry>,
}

impl AddressTable {
    /// Partitions entries into used and unused slots.
    ///
    /// When two slots point at the same address the later slot wins.
    pub fn from_entries(entries: impl IntoIterator<Item = AddressTableEntry>) -> Self {
        let mut table = Self::default();
        for entry in entries {
            if entry.is_used() {
                if let Some(previous) = table.by_address.insert(entry.address, entry.slot) {
                    debug!(
                        "Slots {} and {} both point at {:#x}; keeping {}",
                        previous, entry.slot, entry.address, entry.slot
                    );
                }
                table.used.push(entry);
            } else {
                table.unused.push(entry);
            }
        }
        table
    }

    /// Slot pointing at `address`, if any.
    pub fn slot_for(&self, address: usize) -> Option<u32> {
        let address = u32::try_from(address).ok()?;
        self.by_address.get(&address).copied()
    }

    pub fn used(&self) -> &[AddressTableEntry] {
        &self.used
    }

    pub fn unused(&self) -> &[AddressTableEntry] {
        &self.unused
    }
}

/// A decoded string and where it was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StringRecord {
    pub text: String,
    /// Offset of the first character
    pub offset: usize,
    /// Slot that points at this string
    pub index: Option<u32>,
    pub is_orphan: bool,
}

/// Everything recovered from a LANG.DAT buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LangDecodeResult {
    /// Strings referenced by a slot, in file order
    pub indexed_strings: Vec<StringRecord>,
    /// Strings no slot points at, in file order
    pub orphan_strings: Vec<StringRecord>,
    pub string_region_start: usize,
    pub total_length: usize,
    /// Slots whose address is zero
    pub unused_slots: Vec<u32>,
}

impl LangDecodeResult {
    /// Looks up the string a slot points at.
    pub fn string_by_slot(&self, slot: u32) -> Option<&StringRecord> {
        self.indexed_strings.iter().find(|s| s.index == Some(slot))
    }

    /// Number of strings found in the string region.
    pub fn string_count(&self) -> usize {
        self.indexed_strings.len() + self.orphan_strings.len()
    }
}

/// Reads the address table that precedes the string region.
///
/// Returns the string region start and one entry per 4-byte slot. A start
/// offset that is not a multiple of 4 leaves the remainder unread.
pub fn read_address_table(buffer: &[u8]) -> Result<(usize, Vec<AddressTableEntry>)> {
    let buf = ByteBuffer::new(buffer);
    let start = buf.read_u32_at(0)? as usize;

    let entries = (0..start / lang_layout::SLOT_SIZE)
        .map(|n| {
            let address = buf.read_u32_at(n * lang_layout::SLOT_SIZE)?;
            Ok(AddressTableEntry {
                slot: n as u32,
                address,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok((start, entries))
}

/// Unpacks all strings from a LANG.DAT (or similar) buffer.
///
/// # Errors
///
/// - [`Error::OutOfBounds`] if the address table runs past the buffer
/// - [`Error::TruncatedData`] if the last string has no terminator, or the
///   string region is empty
pub fn unpack_lang(buffer: &[u8], options: &LangOptions) -> Result<LangDecodeResult> {
    let (start, entries) = read_address_table(buffer)?;
    let table = AddressTable::from_entries(entries);

    debug!(
        "String region at {:#x}: {} used slots, {} unused",
        start,
        table.used().len(),
        table.unused().len()
    );

    let mut result = LangDecodeResult {
        indexed_strings: Vec::new(),
        orphan_strings: Vec::new(),
        string_region_start: start,
        total_length: buffer.len(),
        unused_slots: table.unused().iter().map(|e| e.slot).collect(),
    };

    let mut buf = ByteBuffer::at(buffer, start).map_err(|_| Error::TruncatedData {
        offset: start,
    })?;

    // Each iteration consumes at least the terminator, so this ends within
    // buffer.len() steps.
    loop {
        let offset = buf.position();
        let raw = buf.read_null_terminated()?;
        let index = table.slot_for(offset);

        let record = StringRecord {
            text: options.encoding.decode(raw),
            offset,
            index,
            is_orphan: index.is_none(),
        };

        if record.is_orphan {
            result.orphan_strings.push(record);
        } else {
            result.indexed_strings.push(record);
        }

        if buf.is_at_end() {
            break;
        }
    }

    debug!(
        "Decoded {} indexed and {} orphan strings",
        result.indexed_strings.len(),
        result.orphan_strings.len()
    );

    Ok(result)
}
