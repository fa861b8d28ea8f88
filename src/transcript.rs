//! Transcript loading

use std::io::ErrorKind;
use std::path::Path;

use crate::{Result, SummarizeError};

/// Read a transcript file, rejecting missing and blank files.
///
/// The content is returned verbatim; only the emptiness check trims.
pub fn read_transcript(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(SummarizeError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => SummarizeError::NotFound(path.to_path_buf()),
        _ => SummarizeError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    if content.trim().is_empty() {
        return Err(SummarizeError::EmptyTranscript(path.to_path_buf()));
    }

    tracing::debug!(path = %path.display(), bytes = content.len(), "Read transcript");
    Ok(content)
}
