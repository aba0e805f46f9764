//! Core data structures for cell dictionary format components.
//!
//! This module defines the fundamental types used throughout the library:
//! - The decoded [`Lexicon`] and its [`WordEntry`] items
//! - Header metadata and the recognized format revisions
//! - Non-fatal [`Diagnostic`]s produced during decoding

use std::collections::BTreeMap;
use std::fmt;

use super::error::{Result, ScelError};

/// Mapping from syllable index to syllable text (e.g. `1 → "ni"`).
///
/// Keys need not be contiguous.
pub type PinyinTable = BTreeMap<u16, String>;

/// The two known layouts of the cell dictionary format.
///
/// The layouts differ only in the size of a fixed region ahead of the word
/// records, so each revision maps to its own word section offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScelRevision {
    /// Revision byte `0x44`.
    Rev44,
    /// Revision byte `0x45`.
    Rev45,
}

impl ScelRevision {
    /// Byte offset at which the word record section begins.
    pub fn word_section_offset(&self) -> usize {
        match self {
            ScelRevision::Rev44 => 0x2628,
            ScelRevision::Rev45 => 0x26c4,
        }
    }

    /// The raw revision byte as stored at offset 4.
    pub fn as_byte(&self) -> u8 {
        match self {
            ScelRevision::Rev44 => 0x44,
            ScelRevision::Rev45 => 0x45,
        }
    }
}

impl TryFrom<u8> for ScelRevision {
    type Error = ScelError;
    fn try_from(value: u8) -> Result<Self> {
        match value {
            0x44 => Ok(Self::Rev44),
            0x45 => Ok(Self::Rev45),
            other => Err(ScelError::UnknownRevision(other)),
        }
    }
}

impl fmt::Display for ScelRevision {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:#04x}", self.as_byte())
    }
}

/// Fixed-position metadata read from the file header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub revision: ScelRevision,
    /// Where the word records start; derived from `revision`.
    pub word_section_offset: usize,
    /// Number of outer word record groups.
    pub record_count: u32,
    /// Total number of words as declared by the header. Informational only.
    pub total_words: u32,
    /// The two undocumented u32 values at `0x128` and `0x12c`, kept verbatim.
    pub unknown_fields: [u32; 2],
    pub title: String,
    pub category: String,
    pub description: String,
    /// Raw sample text. The vendor's own sub-delimiters are not decoded.
    pub samples: String,
}

/// A single word and the syllables it is pronounced with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    pub text: String,
    /// Indices into [`Lexicon::pinyin_table`], in pronunciation order.
    pub pinyin_indices: Vec<u16>,
    /// Ordinal restoring the canonical order of the words.
    pub sequence: u16,
}

/// A fully decoded cell dictionary.
///
/// Built once per decode call and owned by the caller afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    pub title: String,
    pub category: String,
    pub description: String,
    pub samples: String,
    pub revision: ScelRevision,
    pub total_words: u32,
    pub header_unknown: [u32; 2],
    pub pinyin_table: PinyinTable,
    /// Sorted by ascending `sequence`; ties keep their file order.
    pub words: Vec<WordEntry>,
    pub deleted_words: Vec<String>,
}

impl Lexicon {
    /// Resolves the syllables of `entry` in index order.
    ///
    /// Fails with [`ScelError::DanglingPinyinIndex`] on the first index the
    /// syllable table does not contain.
    pub fn syllables<'a>(&'a self, entry: &WordEntry) -> Result<Vec<&'a str>> {
        entry
            .pinyin_indices
            .iter()
            .map(|index| {
                self.pinyin_table
                    .get(index)
                    .map(String::as_str)
                    .ok_or_else(|| ScelError::DanglingPinyinIndex {
                        word: entry.text.clone(),
                        index: *index,
                    })
            })
            .collect()
    }

    /// Iterates over the words whose pinyin indices are not all present in the table.
    pub fn dangling_words(&self) -> impl Iterator<Item = &WordEntry> + '_ {
        self.words.iter().filter(move |entry| {
            entry
                .pinyin_indices
                .iter()
                .any(|index| !self.pinyin_table.contains_key(index))
        })
    }
}

/// Non-fatal findings reported alongside a successful decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A word's info block carries non-zero values in its three unknown
    /// trailer fields. The values are passed through uninterpreted.
    UnrecognizedExtension {
        word: String,
        sequence: u16,
        /// Offset of the info block within the buffer.
        offset: usize,
        fields: [u16; 3],
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Diagnostic::UnrecognizedExtension { word, sequence, offset, fields } => write!(
                f,
                "unrecognized extension in info block of '{}' (sequence {}, offset {:#x}): {:?}",
                word, sequence, offset, fields
            ),
        }
    }
}

/// The result of a successful decode: the lexicon plus any diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeReport {
    pub lexicon: Lexicon,
    pub diagnostics: Vec<Diagnostic>,
}
