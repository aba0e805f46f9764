//! Cell dictionary header parsing.
//!
//! This module handles:
//! - Validating the magic signature
//! - Mapping the revision byte to the word section offset
//! - Extracting the fixed-position counts and metadata strings

use log::{debug, info, trace};

use crate::scel::cursor::ByteCursor;
use crate::scel::types::{
    error::{Result, ScelError},
    models::{HeaderInfo, ScelRevision},
};

/// Signature stored as a little-endian u32 at offset 0.
pub const MAGIC: u32 = 0x1540;

const REVISION_OFFSET: usize = 0x04;
const RECORD_COUNT_OFFSET: usize = 0x120;
const TOTAL_WORDS_OFFSET: usize = 0x124;
const UNKNOWN_FIELDS_OFFSET: usize = 0x128;
const TITLE_OFFSET: usize = 0x130;
const CATEGORY_OFFSET: usize = 0x338;
const DESCRIPTION_OFFSET: usize = 0x540;
const SAMPLES_OFFSET: usize = 0xd40;

/// Parses the header of a cell dictionary buffer.
///
/// # Header Structure
/// ```text
/// 0x000  u32    magic (0x1540)
/// 0x004  u8     revision (0x44 | 0x45)
/// 0x120  u32    record count
/// 0x124  u32    total word count
/// 0x128  u32×2  unknown
/// 0x130  utf16z title
/// 0x338  utf16z category
/// 0x540  utf16z description
/// 0xd40  utf16z samples
/// ```
pub fn parse(data: &[u8]) -> Result<HeaderInfo> {
    info!("Parsing cell dictionary header");

    // Step 1: Signature
    let magic = ByteCursor::new(data).read_u32()?;
    if magic != MAGIC {
        return Err(ScelError::InvalidMagic {
            expected: MAGIC,
            found: magic,
        });
    }

    // Step 2: Revision selects the word section offset
    let revision_byte = ByteCursor::at(data, REVISION_OFFSET).read_u8()?;
    let revision = ScelRevision::try_from(revision_byte)?;
    let word_section_offset = revision.word_section_offset();
    debug!("Revision {} → word section at {:#x}", revision, word_section_offset);

    // Step 3: Counts
    let mut counts = ByteCursor::at(data, RECORD_COUNT_OFFSET);
    let record_count = counts.read_u32()?;
    let total_words = counts.read_u32()?;
    let mut unknown = ByteCursor::at(data, UNKNOWN_FIELDS_OFFSET);
    let unknown_fields = [unknown.read_u32()?, unknown.read_u32()?];
    trace!(
        "Header counts: records={}, words={}, unknown={:#x?}",
        record_count, total_words, unknown_fields
    );

    // Step 4: Metadata strings
    let title = ByteCursor::at(data, TITLE_OFFSET).read_utf16_nul()?;
    let category = ByteCursor::at(data, CATEGORY_OFFSET).read_utf16_nul()?;
    let description = ByteCursor::at(data, DESCRIPTION_OFFSET).read_utf16_nul()?;
    let samples = ByteCursor::at(data, SAMPLES_OFFSET).read_utf16_nul()?;

    info!(
        "Header parsed: revision={}, title='{}', category='{}', records={}, words={}",
        revision, title, category, record_count, total_words
    );

    Ok(HeaderInfo {
        revision,
        word_section_offset,
        record_count,
        total_words,
        unknown_fields,
        title,
        category,
        description,
        samples,
    })
}
