//! Output path resolution.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::prompt::Prompter;

/// Extension every output file must carry.
pub const PDF_EXTENSION: &str = ".pdf";

/// Result of asking the user where to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputChoice {
    /// Write to this path.
    Path(PathBuf),
    /// The user declined to overwrite an existing file.
    Cancelled,
}

/// Ask for an output filename and confirm overwrites.
///
/// A blank answer keeps `default_path`. Any other answer is used as typed,
/// surrounding spaces included, with `.pdf` appended unless it already ends
/// with it. When the resulting file exists
/// the user must confirm the overwrite, otherwise [`OutputChoice::Cancelled`]
/// is returned.
pub fn resolve_output<P: Prompter + ?Sized>(
    prompter: &mut P,
    default_display_name: &str,
    default_path: &str,
) -> Result<OutputChoice> {
    let answer = prompter.input(
        &format!("Output file name (default: {default_display_name})"),
        default_path,
    )?;

    let output = normalize_output_name(&answer, default_path);

    if output.exists() {
        let overwrite = prompter.confirm(&format!(
            "{} already exists. Overwrite it?",
            output.display()
        ))?;
        if !overwrite {
            log::info!("Overwrite of {} declined", output.display());
            return Ok(OutputChoice::Cancelled);
        }
    }

    Ok(OutputChoice::Path(output))
}

fn normalize_output_name(answer: &str, default_path: &str) -> PathBuf {
    if answer.trim().is_empty() {
        PathBuf::from(default_path)
    } else if answer.ends_with(PDF_EXTENSION) {
        PathBuf::from(answer)
    } else {
        PathBuf::from(format!("{answer}{PDF_EXTENSION}"))
    }
}

/// Whether `output` names the same file as one of `inputs`.
///
/// Paths are compared after canonicalization, so `./a.pdf` and `a.pdf`
/// match. An output that does not exist yet cannot be an input.
pub fn is_one_of(output: &Path, inputs: &[PathBuf]) -> bool {
    let Ok(output) = output.canonicalize() else {
        return false;
    };
    inputs
        .iter()
        .filter_map(|input| input.canonicalize().ok())
        .any(|input| input == output)
}

/// Suggested output for compressing `input`: `<stem>.compressed.pdf`.
///
/// Only a trailing `.pdf` is stripped, so `report.v2.pdf` becomes
/// `report.v2.compressed.pdf`.
pub fn compressed_output_name(input: &Path) -> String {
    let name = input.to_string_lossy();
    let stem = name.strip_suffix(PDF_EXTENSION).unwrap_or(&name);
    format!("{stem}.compressed{PDF_EXTENSION}")
}
