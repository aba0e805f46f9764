//! Core cell dictionary reader module

pub mod convert;
pub mod cursor;
pub mod decoder;
pub mod format;
pub mod reader;
pub mod types;

pub use decoder::{decode, decode_with_diagnostics};
pub use reader::ScelReader;
pub use types::error::{Result, ScelError};
