//! Custom error types for the scel-reader crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
///
/// The structural variants (`InvalidMagic`, `UnknownRevision`, `TruncatedBuffer`,
/// `InvalidFormat`) abort a decode; no partial lexicon is
/// returned when one of them is raised.
#[derive(Debug, Error)]
pub enum ScelError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// The first four bytes are not the cell dictionary signature.
    #[error("Invalid magic: expected {expected:#010x}, found {found:#010x}. Not a cell dictionary file?")]
    InvalidMagic { expected: u32, found: u32 },

    /// The revision byte at offset 4 is not one of the known layouts.
    #[error("Unknown format revision {0:#04x}; the word section offset cannot be determined")]
    UnknownRevision(u8),

    /// A read would run past the end of the buffer, including a
    /// null-terminated string with no terminator before the end.
    #[error("Truncated buffer: needed {needed} bytes at offset {offset:#x}, but only {available} remain")]
    TruncatedBuffer {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// The buffer is structurally invalid in a way not covered by the variants above.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// A word references a pinyin index that the syllable table does not contain.
    #[error("Word '{word}' references pinyin index {index}, which is not in the syllable table")]
    DanglingPinyinIndex { word: String, index: u16 },
}

impl ScelError {
    /// Returns true for every error that means "the buffer ended too early".
    pub fn is_truncation(&self) -> bool {
        matches!(self, ScelError::TruncatedBuffer { .. })
    }
}

/// A convenience `Result` type alias using the crate's `ScelError` type.
pub type Result<T> = std::result::Result<T, ScelError>;
