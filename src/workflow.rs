//! Selection workflow: the menu and the pickers for files and profiles.
//!
//! Each function asks exactly once. An answer outside the offered options
//! comes back as [`Selection::Invalid`], never as an error, so the caller can
//! report it and carry on. Prompt failures propagate as errors.

use std::path::PathBuf;

use crate::config::CompressionProfile;
use crate::error::Result;
use crate::prompt::Prompter;

/// Top-level menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Merge several PDFs into one.
    Merge,
    /// Compress one PDF.
    Compress,
    /// Leave the interactive loop.
    Exit,
}

impl Operation {
    /// Menu entries in display order.
    pub const MENU: [Operation; 3] = [Self::Merge, Self::Compress, Self::Exit];

    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Merge => "Merge PDFs",
            Self::Compress => "Compress a PDF",
            Self::Exit => "Exit",
        }
    }
}

/// Outcome of a single prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    /// The user picked a valid answer.
    Chosen(T),
    /// The answer was not one of the options.
    Invalid,
}

impl<T> Selection<T> {
    fn from_option(value: Option<T>) -> Self {
        value.map_or(Self::Invalid, Self::Chosen)
    }
}

/// Ask which operation to run.
pub fn choose_operation<P: Prompter + ?Sized>(prompter: &mut P) -> Result<Selection<Operation>> {
    let labels: Vec<String> = Operation::MENU
        .iter()
        .map(|op| op.label().to_string())
        .collect();

    let choice = prompter.select("What would you like to do?", &labels)?;
    Ok(Selection::from_option(
        choice.and_then(|idx| Operation::MENU.get(idx).copied()),
    ))
}

/// Ask which files to merge.
///
/// The returned files keep the order the user put them in. An empty vector
/// means nothing was picked.
pub fn choose_merge_inputs<P: Prompter + ?Sized>(
    prompter: &mut P,
    candidates: &[PathBuf],
) -> Result<Selection<Vec<PathBuf>>> {
    let names = display_names(candidates);

    let picked = prompter.multi_select("Select the PDFs to merge", &names)?;
    let files = picked.and_then(|indices| {
        let mut files: Vec<PathBuf> = Vec::with_capacity(indices.len());
        for idx in indices {
            let file = candidates.get(idx)?;
            if !files.contains(file) {
                files.push(file.clone());
            }
        }
        Some(files)
    });

    Ok(Selection::from_option(files))
}

/// Ask which file to compress.
pub fn choose_compress_input<P: Prompter + ?Sized>(
    prompter: &mut P,
    candidates: &[PathBuf],
) -> Result<Selection<PathBuf>> {
    let names = display_names(candidates);

    let choice = prompter.select("Select the PDF to compress", &names)?;
    Ok(Selection::from_option(
        choice.and_then(|idx| candidates.get(idx).cloned()),
    ))
}

/// Ask which Ghostscript preset to use.
pub fn choose_compression_profile<P: Prompter + ?Sized>(
    prompter: &mut P,
) -> Result<Selection<CompressionProfile>> {
    let names: Vec<String> = CompressionProfile::ALL
        .iter()
        .map(ToString::to_string)
        .collect();

    let choice = prompter.select("Select a compression profile", &names)?;
    Ok(Selection::from_option(choice.and_then(|idx| {
        names
            .get(idx)
            .and_then(|name| name.parse::<CompressionProfile>().ok())
    })))
}

fn display_names(candidates: &[PathBuf]) -> Vec<String> {
    candidates
        .iter()
        .map(|path| path.display().to_string())
        .collect()
}
