//! Section parsers for cell dictionary files.
//!
//! # Module Organization
//!
//! - [`header`]: Signature, revision and fixed-position metadata
//! - [`pinyin`]: The syllable index table
//! - [`words`]: Word records and their per-word info blocks
//! - [`deleted`]: The optional trailing deletion table
//!
//! # Architecture
//!
//! ```text
//! File Structure:
//! ┌─────────────────────┐ 0x0000
//! │  Header             │ ← header::parse()
//! ├─────────────────────┤ 0x1540
//! │  Syllable Table     │ ← pinyin::parse()
//! ├─────────────────────┤ 0x2628 / 0x26c4 (by revision)
//! │  Word Records       │ ← words::parse()
//! ├─────────────────────┤
//! │  "DELTBL" table     │ ← deleted::parse() (optional)
//! └─────────────────────┘
//! ```

pub mod deleted;
pub mod header;
pub mod pinyin;
pub mod words;
