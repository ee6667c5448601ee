//! Console output formatting for decode results

use std::fmt::Write as _;

use owo_colors::OwoColorize;

use crate::format::{LangDecodeResult, SfxDecodeResult, StringRecord};

/// Applies a style only when color output is enabled.
fn paint(text: String, color: bool, style: fn(&str) -> String) -> String {
    if color { style(&text) } else { text }
}

fn dimmed(text: &str) -> String {
    text.dimmed().to_string()
}

fn bold(text: &str) -> String {
    text.bold().to_string()
}

fn yellow(text: &str) -> String {
    text.yellow().to_string()
}

fn string_row(record: &StringRecord, color: bool) -> String {
    let slot = match record.index {
        Some(index) => format!("{:>5}", index),
        None => paint(format!("{:>5}", "-"), color, yellow),
    };
    let offset = paint(format!("{:#08x}", record.offset), color, dimmed);
    format!("  [{}] {}  {:?}", slot, offset, record.text)
}

/// Format a LANG.DAT decode result as a table.
///
/// Indexed strings are listed first, then orphans, then the unused slots.
pub fn format_lang_console(result: &LangDecodeResult, color: bool) -> String {
    let mut output = String::new();

    let _ = writeln!(
        output,
        "{}",
        paint(
            format!(
                "{} indexed, {} orphan, {} unused slots",
                result.indexed_strings.len(),
                result.orphan_strings.len(),
                result.unused_slots.len()
            ),
            color,
            bold
        )
    );
    let _ = writeln!(
        output,
        "String region: {:#x}..{:#x}",
        result.string_region_start, result.total_length
    );

    if !result.indexed_strings.is_empty() {
        let _ = writeln!(output);
        let _ = writeln!(output, "=== Indexed strings ===");
        for record in &result.indexed_strings {
            let _ = writeln!(output, "{}", string_row(record, color));
        }
    }

    if !result.orphan_strings.is_empty() {
        let _ = writeln!(output);
        let _ = writeln!(output, "=== Orphan strings ===");
        for record in &result.orphan_strings {
            let _ = writeln!(output, "{}", string_row(record, color));
        }
    }

    if !result.unused_slots.is_empty() {
        let slots: Vec<String> = result.unused_slots.iter().map(u32::to_string).collect();
        let _ = writeln!(output);
        let _ = writeln!(output, "Unused slots: {}", slots.join(", "));
    }

    output
}

/// Format an SFX decode result as a table.
///
/// Missing fields of partially joined sounds are shown as `-`.
pub fn format_sfx_console(result: &SfxDecodeResult, color: bool) -> String {
    let mut output = String::new();
    let header = &result.header;

    let _ = writeln!(
        output,
        "{}",
        paint(
            format!("{} sounds", result.sound_objects.len()),
            color,
            bold
        )
    );
    let _ = writeln!(
        output,
        "Descriptors: {:#x} ({} bytes, {} entries)  Names: {:#x} ({} bytes)",
        header.sound_data_offset,
        header.sound_data_size,
        header.descriptor_count(),
        header.names_offset,
        header.names_size
    );
    let _ = writeln!(output);
    let _ = writeln!(
        output,
        "{}",
        paint(
            format!(
                "{:>5}  {:<12} {:>8}  {:<32}  {}",
                "ID", "NAME", "SIZE", "MD5", "DESCRIPTION"
            ),
            color,
            dimmed
        )
    );

    for sound in &result.sound_objects {
        let size = sound
            .data_len()
            .map(|len| len.to_string())
            .unwrap_or_else(|| "-".to_string());
        let md5 = sound
            .content_hash
            .map(|hash| hash.to_hex())
            .unwrap_or_else(|| "-".to_string());
        let row = format!(
            "{:>5}  {:<12} {:>8}  {:<32}  {}",
            sound.id,
            sound.short_name.as_deref().unwrap_or("-"),
            size,
            md5,
            sound.long_name.as_deref().unwrap_or("-")
        );
        let row = if sound.is_complete() {
            row
        } else {
            paint(row, color, yellow)
        };
        let _ = writeln!(output, "{}", row);
    }

    output
}
