//! SFX sound bank decoding.
//!
//! An `.SFX` file starts with a 28-byte header, followed by a table of 12-byte
//! sound descriptors and a table of variable-length name records. Descriptors
//! point at raw sound data anywhere in the file (absolute offsets). The two
//! tables are linked by position only: the name table holds one record per
//! sound, and each record repeats the sound id.

use std::collections::{BTreeMap, HashMap};

use serde::{Serialize, Serializer};
use tracing::{debug, warn};

use crate::binary::{ByteBuffer, FileKind, verify_magic};
use crate::config::{SfxOptions, TextEncoding, sfx_layout};
use crate::error::{Error, Result};
use crate::hash::ContentHash;

/// Fixed header at the start of every `.SFX` file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SfxHeader {
    /// Always 1 in known files; not enforced
    pub reserved_unknown: u32,
    /// Offset of the sound descriptor table
    pub sound_data_offset: u32,
    /// Size of the descriptor table plus everything after it
    pub sound_plus_trailing_size: u32,
    /// Size of the descriptor table in bytes
    pub sound_data_size: u32,
    /// Offset of the name table
    pub names_offset: u32,
    /// Size of the name table in bytes
    pub names_size: u32,
}

impl SfxHeader {
    pub fn read(buffer: &[u8]) -> Result<Self> {
        let header = ByteBuffer::new(buffer).slice_at(0, sfx_layout::HEADER_SIZE)?;
        let buf = ByteBuffer::new(header);

        Ok(Self {
            reserved_unknown: buf.read_u32_at(sfx_layout::RESERVED_OFFSET)?,
            sound_data_offset: buf.read_u32_at(sfx_layout::SOUND_DATA_OFFSET)?,
            sound_plus_trailing_size: buf.read_u32_at(sfx_layout::SOUND_PLUS_TRAILING_SIZE)?,
            sound_data_size: buf.read_u32_at(sfx_layout::SOUND_DATA_SIZE)?,
            names_offset: buf.read_u32_at(sfx_layout::NAMES_OFFSET)?,
            names_size: buf.read_u32_at(sfx_layout::NAMES_SIZE)?,
        })
    }

    /// Number of descriptors the descriptor table holds, counting a trailing
    /// partial stride.
    pub fn descriptor_count(&self) -> usize {
        (self.sound_data_size as usize).div_ceil(sfx_layout::DESCRIPTOR_SIZE)
    }
}

/// One entry of the sound descriptor table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoundDescriptor {
    pub data_address: u32,
    pub data_size: u32,
    pub id: u32,
}

impl SoundDescriptor {
    pub fn read_at(buffer: &[u8], offset: usize) -> Result<Self> {
        let raw = ByteBuffer::new(buffer).slice_at(offset, sfx_layout::DESCRIPTOR_SIZE)?;
        let mut buf = ByteBuffer::new(raw);

        Ok(Self {
            data_address: buf.read_u32()?,
            data_size: buf.read_u32()?,
            id: buf.read_u32()?,
        })
    }
}

/// Raw sound data referenced by a descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundRecord {
    pub id: u32,
    pub data: Vec<u8>,
    pub content_hash: ContentHash,
}

/// One entry of the name table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameRecord {
    pub id: u16,
    pub short_name: String,
    pub long_name: String,
}

impl NameRecord {
    /// Reads a record at the buffer's position and advances past it.
    pub fn read(buf: &mut ByteBuffer<'_>, encoding: TextEncoding) -> Result<Self> {
        let id = buf.read_u16()?;
        let short_name = encoding.decode(buf.read_null_terminated()?);
        let long_name = encoding.decode(buf.read_null_terminated()?);

        Ok(Self {
            id,
            short_name,
            long_name,
        })
    }
}

/// A sound joined with its names.
///
/// Fields from a table that had no entry for this id are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SoundObject {
    pub id: u32,
    pub short_name: Option<String>,
    pub long_name: Option<String>,
    #[serde(rename = "size", serialize_with = "serialize_data_len")]
    pub data: Option<Vec<u8>>,
    #[serde(rename = "md5")]
    pub content_hash: Option<ContentHash>,
}

impl SoundObject {
    fn join(id: u32, name: Option<NameRecord>, sound: Option<SoundRecord>) -> Self {
        let (short_name, long_name) = match name {
            Some(name) => (Some(name.short_name), Some(name.long_name)),
            None => (None, None),
        };
        let (data, content_hash) = match sound {
            Some(sound) => (Some(sound.data), Some(sound.content_hash)),
            None => (None, None),
        };

        Self {
            id,
            short_name,
            long_name,
            data,
            content_hash,
        }
    }

    /// True when both the sound and its names were found.
    pub fn is_complete(&self) -> bool {
        self.data.is_some() && self.short_name.is_some()
    }

    /// Size of the sound data in bytes, if present.
    pub fn data_len(&self) -> Option<usize> {
        self.data.as_ref().map(Vec::len)
    }
}

fn serialize_data_len<S: Serializer>(
    data: &Option<Vec<u8>>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match data {
        Some(data) => serializer.serialize_some(&data.len()),
        None => serializer.serialize_none(),
    }
}

/// Everything recovered from an `.SFX` buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SfxDecodeResult {
    pub sound_objects: Vec<SoundObject>,
    pub header: SfxHeader,
}

/// Reads every sound descriptor and the data it points at.
///
/// Returns the number of descriptors read and the sounds keyed by id. A
/// repeated id replaces the earlier sound.
pub fn read_sound_records(
    buffer: &[u8],
    header: &SfxHeader,
) -> Result<(usize, BTreeMap<u32, SoundRecord>)> {
    let base = header.sound_data_offset as usize;
    let buf = ByteBuffer::new(buffer);
    let mut sounds = BTreeMap::new();
    let mut count = 0;

    for relative in (0..header.sound_data_size as usize).step_by(sfx_layout::DESCRIPTOR_SIZE) {
        let descriptor = SoundDescriptor::read_at(buffer, base + relative)?;
        let data = buf.slice_at(
            descriptor.data_address as usize,
            descriptor.data_size as usize,
        )?;

        let record = SoundRecord {
            id: descriptor.id,
            data: data.to_vec(),
            content_hash: ContentHash::of(data),
        };

        if sounds.insert(descriptor.id, record).is_some() {
            warn!(
                "Duplicate sound id {} in descriptor {}; keeping the later one",
                descriptor.id, count
            );
        }
        count += 1;
    }

    Ok((count, sounds))
}

/// Reads `count` consecutive name records starting at `offset`.
pub fn read_name_records(
    buffer: &[u8],
    offset: usize,
    count: usize,
    encoding: TextEncoding,
) -> Result<Vec<NameRecord>> {
    if count == 0 {
        return Ok(Vec::new());
    }

    let mut buf = ByteBuffer::at(buffer, offset)?;
    (0..count)
        .map(|_| NameRecord::read(&mut buf, encoding))
        .collect()
}

/// Joins names and sounds by id.
///
/// Objects follow name-table order; sounds without a name record come last
/// in ascending id order. A repeated name id keeps its first position and its
/// last contents. Returns the objects and how many of them are partial.
fn join_by_id(
    names: Vec<NameRecord>,
    mut sounds: BTreeMap<u32, SoundRecord>,
) -> (Vec<SoundObject>, usize) {
    let mut order = Vec::with_capacity(names.len());
    let mut names_by_id = HashMap::with_capacity(names.len());

    for name in names {
        let id = u32::from(name.id);
        if names_by_id.insert(id, name).is_none() {
            order.push(id);
        } else {
            warn!("Duplicate name record for sound id {}", id);
        }
    }

    let mut objects = Vec::with_capacity(order.len() + sounds.len());
    for id in order {
        let name = names_by_id.remove(&id);
        let sound = sounds.remove(&id);
        if sound.is_none() {
            debug!("Name record {} has no matching sound", id);
        }
        objects.push(SoundObject::join(id, name, sound));
    }
    for (id, sound) in sounds {
        debug!("Sound {} has no matching name record", id);
        objects.push(SoundObject::join(id, None, Some(sound)));
    }

    let partial = objects.iter().filter(|o| !o.is_complete()).count();
    (objects, partial)
}

/// Unpacks all sounds and their names from an `.SFX` buffer.
///
/// # Errors
///
/// - [`Error::FormatMismatch`] if `verify_magic` is set and the tag is wrong
/// - [`Error::OutOfBounds`] if the header, a descriptor or sound data runs
///   past the buffer
/// - [`Error::TruncatedData`] if a name is missing its terminator
/// - [`Error::InconsistentCount`] if `strict_counts` is set and the two
///   tables disagree
pub fn unpack_sfx(buffer: &[u8], options: &SfxOptions) -> Result<SfxDecodeResult> {
    if options.verify_magic {
        verify_magic(buffer, FileKind::Sfx)?;
    }

    let header = SfxHeader::read(buffer)?;
    if header.reserved_unknown != 1 {
        debug!("Unexpected reserved header value {}", header.reserved_unknown);
    }

    let (descriptor_count, sounds) = read_sound_records(buffer, &header)?;
    let names = read_name_records(
        buffer,
        header.names_offset as usize,
        sounds.len(),
        options.encoding,
    )?;
    let name_count = names.len();

    let (sound_objects, partial) = join_by_id(names, sounds);
    debug!(
        "Decoded {} sound objects from {} descriptors ({} partial)",
        sound_objects.len(),
        descriptor_count,
        partial
    );

    if options.strict_counts && (partial > 0 || descriptor_count != name_count) {
        return Err(Error::InconsistentCount {
            sounds: descriptor_count,
            names: name_count,
            unmatched: partial,
        });
    }

    Ok(SfxDecodeResult {
        sound_objects,
        header,
    })
}
