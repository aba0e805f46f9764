//! # scel-reader
//!
//! A reader for Sogou cell dictionary files (`.scel`).
//! Supports format revisions `0x44` and `0x45`, including the optional
//! trailing deletion table.
//!
//! ```no_run
//! let data = std::fs::read("城市信息大全.scel").unwrap();
//! let lexicon = scel_reader::decode(&data).unwrap();
//! for word in &lexicon.words {
//!     let pinyin = lexicon.syllables(word).unwrap().join(" ");
//!     println!("{}\t{}", word.text, pinyin);
//! }
//! ```
pub mod scel;

// Re-export the main types for convenience
pub use scel::{
    decode,
    decode_with_diagnostics,
    ScelError,
    ScelReader,
    Result,
    cursor::ByteCursor,
    types::models::{
        DecodeReport,
        Diagnostic,
        HeaderInfo,
        Lexicon,
        PinyinTable,
        ScelRevision,
        WordEntry,
    },
};
