use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use super::decoder;
use super::types::error::Result;
use super::types::models::{Diagnostic, Lexicon};

/// The main reader for cell dictionary (.scel) files.
///
/// The whole file is loaded and decoded up front; the reader keeps no file
/// handle open afterwards.
#[derive(Debug, Clone)]
pub struct ScelReader {
    path: PathBuf,
    pub lexicon: Lexicon,
    /// Non-fatal findings, e.g. unrecognized info block extensions.
    pub diagnostics: Vec<Diagnostic>,
}

impl ScelReader {
    /// Read and decode a cell dictionary from the given path.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file cannot be read
    /// - The signature or revision is not recognized
    /// - The file is truncated
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening cell dictionary: {}", path.display());
        let data = fs::read(path)?;
        let report = decoder::decode_with_diagnostics(&data)?;

        Ok(Self {
            path: path.to_path_buf(),
            lexicon: report.lexicon,
            diagnostics: report.diagnostics,
        })
    }

    /// Path the dictionary was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of decoded words.
    pub fn num_words(&self) -> usize {
        self.lexicon.words.len()
    }

    /// Consumes the reader, returning the decoded lexicon.
    pub fn into_lexicon(self) -> Lexicon {
        self.lexicon
    }
}
