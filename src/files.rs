//! Candidate discovery in the working directory.

use crate::error::{CpdfError, Result};
use std::path::{Path, PathBuf};

/// Pattern every candidate must match.
pub const PDF_PATTERN: &str = "*.pdf";

/// List the PDF files in the current directory.
///
/// Called once per operation so files written by a previous merge or
/// compress show up in the next menu round. Directories named `*.pdf` are
/// skipped.
pub fn list_candidates() -> Result<Vec<PathBuf>> {
    let mut candidates = Vec::new();

    for entry in glob::glob(PDF_PATTERN)? {
        let path = entry?;
        if path.is_file() {
            candidates.push(path);
        }
    }

    log::debug!("Found {} candidate file(s): {:?}", candidates.len(), candidates);
    Ok(candidates)
}

/// Size of `path` in bytes.
pub async fn file_size(path: &Path) -> Result<u64> {
    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|err| CpdfError::file_size(path, err))?;
    Ok(metadata.len())
}
