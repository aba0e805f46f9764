//! Decoding orchestration (header → syllables → words → deletion table).

use log::{debug, info, warn};

use super::format::{deleted, header, pinyin, words};
use super::types::error::Result;
use super::types::models::{DecodeReport, Lexicon};

/// Decodes a cell dictionary held in memory.
///
/// Diagnostics are logged and dropped; use [`decode_with_diagnostics`] to
/// receive them.
///
/// # Errors
/// Returns an error if:
/// - The signature is wrong ([`ScelError::InvalidMagic`](super::ScelError::InvalidMagic))
/// - The revision byte is unknown ([`ScelError::UnknownRevision`](super::ScelError::UnknownRevision))
/// - Any section runs past the end of the buffer
pub fn decode(data: &[u8]) -> Result<Lexicon> {
    decode_with_diagnostics(data).map(|report| report.lexicon)
}

/// Decodes a cell dictionary and returns the non-fatal diagnostics with it.
pub fn decode_with_diagnostics(data: &[u8]) -> Result<DecodeReport> {
    let header = header::parse(data)?;

    let (pinyin_table, pinyin_end) = pinyin::parse(data, pinyin::PINYIN_TABLE_OFFSET)?;
    if pinyin_end > header.word_section_offset {
        warn!(
            "Syllable table ends at {:#x}, past the word section at {:#x}",
            pinyin_end, header.word_section_offset
        );
    }

    let (words, words_end, diagnostics) =
        words::parse(data, header.word_section_offset, header.record_count)?;
    if words.len() as u64 != u64::from(header.total_words) {
        debug!(
            "Header declares {} words, decoded {}",
            header.total_words,
            words.len()
        );
    }

    let (deleted_words, end) = deleted::parse(data, words_end)?;
    if end < data.len() {
        debug!("{} trailing bytes after offset {:#x}", data.len() - end, end);
    }

    let lexicon = Lexicon {
        title: header.title,
        category: header.category,
        description: header.description,
        samples: header.samples,
        revision: header.revision,
        total_words: header.total_words,
        header_unknown: header.unknown_fields,
        pinyin_table,
        words,
        deleted_words,
    };

    for entry in lexicon.dangling_words() {
        warn!(
            "Word '{}' references syllables missing from the table: {:?}",
            entry.text, entry.pinyin_indices
        );
    }

    info!(
        "Decoded '{}': {} syllables, {} words, {} deleted, {} diagnostics",
        lexicon.title,
        lexicon.pinyin_table.len(),
        lexicon.words.len(),
        lexicon.deleted_words.len(),
        diagnostics.len()
    );

    Ok(DecodeReport { lexicon, diagnostics })
}
