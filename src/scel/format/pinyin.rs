//! Syllable table parsing.

use log::{debug, trace};

use crate::scel::cursor::ByteCursor;
use crate::scel::types::{error::Result, models::PinyinTable};

/// Offset of the syllable table in every known revision.
pub const PINYIN_TABLE_OFFSET: usize = 0x1540;

/// Reads the syllable table starting at `start`.
///
/// ```text
/// u32 count
/// count × { u16 index, u16 byte_len, utf16[byte_len] syllable }
/// ```
///
/// A repeated index overwrites the earlier syllable. Returns the table and the
/// offset just past the last entry.
pub fn parse(data: &[u8], start: usize) -> Result<(PinyinTable, usize)> {
    let mut cursor = ByteCursor::at(data, start);
    let count = cursor.read_u32()?;
    debug!("Syllable table at {:#x}: {} entries", start, count);

    let mut table = PinyinTable::new();
    for _ in 0..count {
        let index = cursor.read_u16()?;
        let byte_len = cursor.read_u16()? as usize;
        let syllable = cursor.read_utf16(byte_len)?;
        trace!("Syllable {} → '{}'", index, syllable);
        if let Some(previous) = table.insert(index, syllable) {
            debug!("Syllable index {} redefined (was '{}')", index, previous);
        }
    }

    Ok((table, cursor.position()))
}
