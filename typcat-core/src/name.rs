//! Name-table record selection (made by FontLab https://www.fontlab.com/)
//!
//! The `name` table can hold the same string a dozen times over for
//! different platform/encoding/language combinations. Candidates limited
//! to Family Name (ID 1) and Full Name (ID 4) are scored, and the best
//! non-empty decode wins. Replacement requires a strictly greater score,
//! so equal-scoring records keep whichever came first in the file.

use std::path::Path;

use anyhow::{Context, Result};

use crate::sfnt::{self, SfntWindow};

/// Name ID for the font family name.
pub const FAMILY_NAME_ID: u16 = 1;
/// Name ID for the full font name.
pub const FULL_NAME_ID: u16 = 4;

/// Upper bound on the record count before a table is treated as corrupt.
pub const MAX_NAME_RECORDS: u16 = 500;

const WINDOWS_PLATFORM: u16 = 3;
const UNICODE_PLATFORM: u16 = 0;
const MACINTOSH_PLATFORM: u16 = 1;
const WINDOWS_ENGLISH_US: u16 = 0x0409;

/// One 12-byte record from the name table.
#[derive(Debug, Clone, Copy)]
struct NameRecord {
    platform_id: u16,
    encoding_id: u16,
    language_id: u16,
    name_id: u16,
    length: u16,
    offset: u16,
}

fn record_at(table: &SfntWindow, index: usize) -> Option<NameRecord> {
    let base = 6 + index * 12;
    Some(NameRecord {
        platform_id: table.u16_at(base)?,
        encoding_id: table.u16_at(base + 2)?,
        language_id: table.u16_at(base + 4)?,
        name_id: table.u16_at(base + 6)?,
        length: table.u16_at(base + 8)?,
        offset: table.u16_at(base + 10)?,
    })
}

fn score(record: &NameRecord) -> u32 {
    let base = if record.name_id == FULL_NAME_ID { 10 } else { 0 };

    let encoding = match (record.platform_id, record.encoding_id) {
        (WINDOWS_PLATFORM, 1) => 5,
        (UNICODE_PLATFORM, _) => 3,
        (MACINTOSH_PLATFORM, 0) => 2,
        _ => 0,
    };

    let language = match record.platform_id {
        WINDOWS_PLATFORM if record.language_id == WINDOWS_ENGLISH_US => 1,
        MACINTOSH_PLATFORM if record.language_id == 0 => 1,
        UNICODE_PLATFORM => 1,
        _ => 0,
    };

    base + encoding + language
}

/// Lossy transliteration of a record's string bytes.
///
/// Unicode and Windows platforms store UTF-16BE; only code units whose low
/// byte is printable ASCII survive, everything else is dropped. Other
/// platforms are read as 8-bit text with NUL bytes stripped.
fn decode(platform_id: u16, bytes: &[u8]) -> String {
    match platform_id {
        UNICODE_PLATFORM | WINDOWS_PLATFORM => bytes
            .chunks_exact(2)
            .filter_map(|pair| {
                let low = pair[1];
                (0x20..=0x7E).contains(&low).then(|| low as char)
            })
            .collect(),
        _ => bytes
            .iter()
            .filter(|&&b| b != 0)
            .map(|&b| b as char)
            .collect(),
    }
}

/// Pick the best human-readable name out of a loaded `name` table.
///
/// Returns `None` when the table is corrupt beyond use or no record
/// decodes to a non-empty string. A record that would run past the loaded
/// window stops the scan but keeps whatever already won.
pub fn select_display_name(table: &SfntWindow) -> Option<String> {
    let count = table.u16_at(2)?;
    if count > MAX_NAME_RECORDS {
        return None;
    }
    let storage = usize::from(table.u16_at(4)?);

    let mut best: Option<(u32, String)> = None;

    for index in 0..usize::from(count) {
        let record = match record_at(table, index) {
            Some(record) => record,
            None => break,
        };

        if record.name_id != FAMILY_NAME_ID && record.name_id != FULL_NAME_ID {
            continue;
        }

        let candidate_score = score(&record);
        if let Some((best_score, _)) = &best {
            if candidate_score <= *best_score {
                continue;
            }
        }

        let start = storage + usize::from(record.offset);
        let decoded = decode(
            record.platform_id,
            table.bytes_at(start, usize::from(record.length)),
        );
        if decoded.is_empty() {
            continue;
        }

        best = Some((candidate_score, decoded));
    }

    best.map(|(_, name)| name)
}

/// Extract a display name straight from a font file.
///
/// Any failure, from an unreadable file to a nameless table, surfaces as
/// an error for the caller to degrade on.
pub fn extract_display_name(path: &Path) -> Result<String> {
    let table = sfnt::load_name_table(path)?;
    select_display_name(&table)
        .with_context(|| format!("no usable name strings in {}", path.display()))
}
