//! Decoders for the game's container formats.

pub mod lang;
pub mod sfx;

pub use lang::{
    AddressTable, AddressTableEntry, LangDecodeResult, StringRecord, read_address_table,
    unpack_lang,
};
pub use sfx::{
    NameRecord, SfxDecodeResult, SfxHeader, SoundDescriptor, SoundObject, SoundRecord,
    read_name_records, read_sound_records, unpack_sfx,
};
