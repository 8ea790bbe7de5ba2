//! File load/decode/write helpers
//!
//! Each operation opens, uses and releases its file; no handles outlive a
//! call. A missing input file is distinguished from other IO failures so the
//! CLI can exit with the right code.

use crate::domain::JournalDocument;
use crate::error::{MergeError, Result};
use std::fs;
use std::path::Path;

/// Load and decode a journal backup document.
pub fn load_document(path: &Path) -> Result<JournalDocument> {
    let contents = read_text(path)?;
    let document = serde_json::from_str(&contents)?;
    Ok(document)
}

/// Read a file to a string, mapping a missing file to `FileNotFound`.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            MergeError::FileNotFound(path.to_path_buf())
        } else {
            MergeError::Io(e)
        }
    })
}

/// Serialize a journal document, indented, and write it out.
///
/// serde_json leaves non-ASCII characters unescaped, so note text survives
/// byte-for-byte.
pub fn write_document(path: &Path, document: &JournalDocument) -> Result<()> {
    let contents = serde_json::to_string_pretty(document)?;
    fs::write(path, contents)?;
    Ok(())
}
