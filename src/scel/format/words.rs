//! Word record parsing.
//!
//! Each outer record shares one group of pinyin indices between one or more
//! words:
//!
//! ```text
//! u16 word_count
//! u16 pinyin_byte_len          (index count = pinyin_byte_len / 2)
//! u16 × index_count            pinyin indices
//! word_count × {
//!     u16 word_byte_len
//!     utf16[word_byte_len]     word text
//!     u16 info_len
//!     info_len bytes {         u16 sequence, u16 flag, u16 × 3 unknown, ...
//!     }
//! }
//! ```

use byteorder::{ByteOrder, LittleEndian};
use log::{debug, trace, warn};

use crate::scel::cursor::ByteCursor;
use crate::scel::types::{
    error::{Result, ScelError},
    models::{Diagnostic, WordEntry},
};

/// Words sorted by sequence, the offset past the last record, and any
/// non-fatal diagnostics raised on the way.
pub type ParseResult = (Vec<WordEntry>, usize, Vec<Diagnostic>);

/// Decoded contents of one per-word info block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct InfoBlock {
    sequence: u16,
    flag: u16,
    unknown: [u16; 3],
}

impl InfoBlock {
    /// Interprets the fields covered by the block. Fields past its declared
    /// length are treated as zero; only the sequence number is mandatory.
    fn parse(block: &[u8], offset: usize) -> Result<Self> {
        let field = |i: usize| block.get(i * 2..i * 2 + 2).map(LittleEndian::read_u16);
        let sequence = field(0).ok_or_else(|| {
            ScelError::InvalidFormat(format!(
                "Info block at {:#x} is {} bytes long, too short for a sequence number",
                offset,
                block.len()
            ))
        })?;
        Ok(Self {
            sequence,
            flag: field(1).unwrap_or(0),
            unknown: [
                field(2).unwrap_or(0),
                field(3).unwrap_or(0),
                field(4).unwrap_or(0),
            ],
        })
    }
}

/// Reads `record_count` word records starting at `start`.
pub fn parse(data: &[u8], start: usize, record_count: u32) -> Result<ParseResult> {
    let mut cursor = ByteCursor::at(data, start);
    let mut words = Vec::new();
    let mut diagnostics = Vec::new();

    for record in 0..record_count {
        let record_start = cursor.position();
        let word_count = cursor.read_u16()?;
        let pinyin_byte_len = cursor.read_u16()?;
        let pinyin_indices = (0..pinyin_byte_len / 2)
            .map(|_| cursor.read_u16())
            .collect::<Result<Vec<u16>>>()?;
        trace!(
            "Record {} at {:#x}: {} words, pinyin {:?}",
            record,
            record_start,
            word_count,
            pinyin_indices
        );

        for _ in 0..word_count {
            let word_byte_len = cursor.read_u16()? as usize;
            let text = cursor.read_utf16(word_byte_len)?;

            let info_len = cursor.read_u16()? as usize;
            let info_offset = cursor.position();
            let info = InfoBlock::parse(cursor.read_bytes(info_len)?, info_offset)?;
            trace!("Word '{}' seq={} flag={:#06x}", text, info.sequence, info.flag);

            if info.unknown != [0, 0, 0] {
                warn!(
                    "Unrecognized extension in info block of '{}' at {:#x}: {:?}",
                    text, info_offset, info.unknown
                );
                diagnostics.push(Diagnostic::UnrecognizedExtension {
                    word: text.clone(),
                    sequence: info.sequence,
                    offset: info_offset,
                    fields: info.unknown,
                });
            }

            words.push(WordEntry {
                text,
                pinyin_indices: pinyin_indices.clone(),
                sequence: info.sequence,
            });
        }
    }

    // stable: equal sequence numbers keep file order
    words.sort_by_key(|entry| entry.sequence);
    debug!(
        "Word section {:#x}..{:#x}: {} records, {} words",
        start,
        cursor.position(),
        record_count,
        words.len()
    );

    Ok((words, cursor.position(), diagnostics))
}
