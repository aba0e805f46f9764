//! Text projection of a decoded lexicon and the file conversion glue.
//!
//! Every word becomes one line:
//!
//! ```text
//! <word>\t<syllable> <syllable> ...\t<frequency>\n
//! ```

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use walkdir::WalkDir;

use super::reader::ScelReader;
use super::types::error::{Result, ScelError};
use super::types::models::{Diagnostic, Lexicon};

/// File extension of cell dictionaries (matched case-insensitively).
pub const SCEL_EXTENSION: &str = "scel";

/// Writes the projection of `lexicon` to `out`, in `words` order.
///
/// Fails with [`ScelError::DanglingPinyinIndex`] before writing the offending
/// line if a word references a syllable missing from the table.
pub fn write_text<W: Write>(lexicon: &Lexicon, frequency: i64, out: &mut W) -> Result<()> {
    for entry in &lexicon.words {
        let syllables = lexicon.syllables(entry)?;
        writeln!(out, "{}\t{}\t{}", entry.text, syllables.join(" "), frequency)?;
    }
    Ok(())
}

/// Returns the projection of `lexicon` as a string.
pub fn to_text(lexicon: &Lexicon, frequency: i64) -> Result<String> {
    let mut buf = Vec::new();
    write_text(lexicon, frequency, &mut buf)?;
    String::from_utf8(buf).map_err(|e| ScelError::InvalidFormat(e.to_string()))
}

/// Returns true if `path` has a `.scel` extension, in any letter case.
pub fn is_scel_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(SCEL_EXTENSION))
}

/// Where the text for `input` is written: the same path with a `.txt`
/// extension, relocated under `output_dir` (keeping the path relative to
/// `root`) when one is given.
pub fn output_path(input: &Path, root: &Path, output_dir: Option<&Path>) -> PathBuf {
    let target = match output_dir {
        Some(dir) => {
            let relative = input
                .strip_prefix(root)
                .ok()
                .filter(|rel| !rel.as_os_str().is_empty())
                .or_else(|| input.file_name().map(Path::new))
                .unwrap_or(input);
            dir.join(relative)
        }
        None => input.to_path_buf(),
    };
    target.with_extension("txt")
}

/// Outcome of converting a single file.
#[derive(Debug, Clone)]
pub struct ConvertSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub words: usize,
    pub diagnostics: Vec<Diagnostic>,
}

/// Outcome of converting a directory tree.
#[derive(Debug, Default)]
pub struct DirectorySummary {
    pub converted: Vec<ConvertSummary>,
    pub failed: Vec<(PathBuf, ScelError)>,
}

impl DirectorySummary {
    /// True when no file under the walked tree failed to convert.
    pub fn all_converted(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Decodes `input` and writes its projection to `output`.
///
/// The output is only created once decoding and syllable lookup have
/// succeeded, so a failed conversion leaves no partial text file behind.
pub fn process_file(input: &Path, output: &Path, frequency: i64) -> Result<ConvertSummary> {
    let reader = ScelReader::new(input)?;
    for diagnostic in &reader.diagnostics {
        warn!("{}: {}", input.display(), diagnostic);
    }

    let text = to_text(&reader.lexicon, frequency)?;
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(fs::File::create(output)?);
    writer.write_all(text.as_bytes())?;
    writer.flush()?;

    info!(
        "Converted {} → {} ({} words)",
        input.display(),
        output.display(),
        reader.num_words()
    );

    Ok(ConvertSummary {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        words: reader.num_words(),
        diagnostics: reader.diagnostics,
    })
}

/// Converts every `.scel` file below `root`.
///
/// A file that fails to convert is recorded in
/// [`DirectorySummary::failed`] and the walk continues. Only a failure to
/// walk the tree itself is returned as an error.
pub fn process_directory(
    root: &Path,
    frequency: i64,
    output_dir: Option<&Path>,
) -> Result<DirectorySummary> {
    let mut inputs = Vec::new();
    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry.map_err(std::io::Error::from)?;
        if entry.file_type().is_file() && is_scel_file(entry.path()) {
            inputs.push(entry.into_path());
        }
    }
    inputs.sort();
    debug!("Found {} cell dictionaries under {}", inputs.len(), root.display());

    let mut summary = DirectorySummary::default();
    for input in inputs {
        let output = output_path(&input, root, output_dir);
        match process_file(&input, &output, frequency) {
            Ok(converted) => summary.converted.push(converted),
            Err(e) => {
                warn!("Failed to convert {}: {}", input.display(), e);
                summary.failed.push((input, e));
            }
        }
    }

    Ok(summary)
}
