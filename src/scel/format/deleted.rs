//! Optional trailing deletion table.
//!
//! The table has no flag in the header; it is present only when the bytes
//! right after the word records spell the sentinel `"DELTBL"` in UTF-16LE.

use log::debug;

use crate::scel::cursor::ByteCursor;
use crate::scel::types::error::Result;

/// `"DELTBL"` encoded as UTF-16LE.
pub const SENTINEL: [u8; 12] = [
    b'D', 0, b'E', 0, b'L', 0, b'T', 0, b'B', 0, b'L', 0,
];

/// Reads the deletion table at `offset` if the sentinel is there.
///
/// On a mismatch (including fewer than 12 remaining bytes) nothing is consumed
/// and `(vec![], offset)` is returned.
///
/// ```text
/// [12 bytes] sentinel
/// u16 count
/// count × { u16 char_count, utf16[char_count * 2] word }
/// ```
pub fn parse(data: &[u8], offset: usize) -> Result<(Vec<String>, usize)> {
    let mut cursor = ByteCursor::at(data, offset);
    if cursor.peek_bytes(SENTINEL.len()) != Some(&SENTINEL[..]) {
        debug!("No deletion table at {:#x}", offset);
        return Ok((Vec::new(), offset));
    }
    cursor.skip(SENTINEL.len())?;

    let count = cursor.read_u16()?;
    let deleted = (0..count)
        .map(|_| {
            let byte_len = cursor.read_u16()? as usize * 2;
            cursor.read_utf16(byte_len)
        })
        .collect::<Result<Vec<String>>>()?;
    debug!("Deletion table at {:#x}: {} words", offset, deleted.len());

    Ok((deleted, cursor.position()))
}
