//! Windowed SFNT container reads (made by FontLab https://www.fontlab.com/)
//!
//! Everything here works on bounded windows of the file rather than the
//! whole thing: a 524-byte header window covers the offset table plus a
//! generous run of 16-byte directory entries, and the `name` table itself
//! is capped at 8 KiB no matter what length the directory claims. All
//! multi-byte reads are big-endian and bounds-checked.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use anyhow::{anyhow, Context, Result};

/// Window size for the offset table and table directory.
pub const HEADER_WINDOW_LEN: usize = 524;
/// Upper bound on `numTables` before a file is treated as corrupt.
pub const MAX_TABLES: u16 = 100;
/// Cap on how much of a `name` table is ever loaded.
pub const NAME_TABLE_CAP: u32 = 8192;

const TTC_TAG: [u8; 4] = *b"ttcf";
const NAME_TAG: [u8; 4] = *b"name";

/// Read a big-endian u16 at `offset`, or `None` if the bytes are not there.
pub fn read_u16_be(data: &[u8], offset: usize) -> Option<u16> {
    let end = offset.checked_add(2)?;
    let bytes = data.get(offset..end)?;
    Some(u16::from_be_bytes([bytes[0], bytes[1]]))
}

/// Read a big-endian u32 at `offset`, or `None` if the bytes are not there.
pub fn read_u32_be(data: &[u8], offset: usize) -> Option<u32> {
    let end = offset.checked_add(4)?;
    let bytes = data.get(offset..end)?;
    Some(u32::from_be_bytes(bytes.try_into().ok()?))
}

/// A chunk of a font file plus the file offset it was read from.
///
/// Offsets passed to the accessors are local to the window; callers track
/// the translation between table file offsets and window positions.
#[derive(Debug, Clone)]
pub struct SfntWindow {
    data: Vec<u8>,
    file_offset: u64,
}

impl SfntWindow {
    pub fn new(data: Vec<u8>, file_offset: u64) -> Self {
        Self { data, file_offset }
    }

    /// File offset the window starts at.
    pub fn file_offset(&self) -> u64 {
        self.file_offset
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn u16_at(&self, offset: usize) -> Option<u16> {
        read_u16_be(&self.data, offset)
    }

    pub fn u32_at(&self, offset: usize) -> Option<u32> {
        read_u32_be(&self.data, offset)
    }

    pub fn tag_at(&self, offset: usize) -> Option<[u8; 4]> {
        let end = offset.checked_add(4)?;
        let bytes = self.data.get(offset..end)?;
        Some([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    /// Bytes at `offset..offset + len`, clamped to the loaded window.
    ///
    /// Tables that claim more data than the file holds come back short; a
    /// range entirely outside the window comes back empty.
    pub fn bytes_at(&self, offset: usize, len: usize) -> &[u8] {
        let start = offset.min(self.data.len());
        let end = offset.saturating_add(len).min(self.data.len());
        &self.data[start..end]
    }
}

/// Locate and load the `name` table of the font at `path`.
///
/// TrueType Collections are redirected to their first member; the other
/// members never get a vote. The returned window holds at most
/// [`NAME_TABLE_CAP`] bytes, fewer when the file ends early. The file
/// handle lives only for the duration of this call.
pub fn load_name_table(path: &Path) -> Result<SfntWindow> {
    let mut file =
        File::open(path).with_context(|| format!("opening font {}", path.display()))?;

    let mut header = read_window(&mut file, 0, HEADER_WINDOW_LEN)?;
    if header.tag_at(0) == Some(TTC_TAG) {
        let first_face = header
            .u32_at(12)
            .context("collection header is truncated")?;
        header = read_window(&mut file, u64::from(first_face), HEADER_WINDOW_LEN)?;
    }

    let num_tables = header.u16_at(4).context("offset table is truncated")?;
    if num_tables > MAX_TABLES {
        return Err(anyhow!("implausible table count: {num_tables}"));
    }

    for index in 0..usize::from(num_tables) {
        let entry = 12 + index * 16;
        let tag = header
            .tag_at(entry)
            .context("table directory runs past the loaded header window")?;
        if tag != NAME_TAG {
            continue;
        }

        let offset = header
            .u32_at(entry + 8)
            .context("name directory entry is truncated")?;
        let length = header
            .u32_at(entry + 12)
            .context("name directory entry is truncated")?;

        let capped = length.min(NAME_TABLE_CAP);
        return read_window(&mut file, u64::from(offset), capped as usize);
    }

    Err(anyhow!("font has no name table"))
}

/// Read up to `len` bytes starting at `offset`; short files yield short
/// windows rather than errors.
fn read_window(file: &mut File, offset: u64, len: usize) -> Result<SfntWindow> {
    file.seek(SeekFrom::Start(offset))
        .context("seeking in font file")?;

    let mut data = Vec::with_capacity(len);
    file.by_ref()
        .take(len as u64)
        .read_to_end(&mut data)
        .context("reading font file")?;

    Ok(SfntWindow::new(data, offset))
}
