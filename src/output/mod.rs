//! Output formatting and display for cpdf.
//!
//! This module handles all user-facing output:
//! - Formatted status messages
//! - The outcome of each merge or compress operation

pub mod formatter;

pub use formatter::{MessageLevel, OutputFormatter};

use crate::app::{CompressOutcome, MergeOutcome};

/// Message shown when the working directory has no PDFs.
pub const NO_CANDIDATES: &str = "No PDF files found in the current directory";

/// Message shown for an answer outside the offered options.
pub const INVALID_OPTION: &str = "Invalid option";

/// Message shown when the chosen output would overwrite an input.
pub const OUTPUT_IS_INPUT: &str = "The output file cannot be one of the input files";

/// A rendered line and the level it is shown at.
pub type Line = (MessageLevel, String);

/// Lines that close a merge. `Cancelled` prints nothing.
pub fn merge_outcome_lines(outcome: &MergeOutcome) -> Vec<Line> {
    match outcome {
        MergeOutcome::Merged { output } => vec![(
            MessageLevel::Success,
            format!("Merged successfully! Output file: {}", output.display()),
        )],
        MergeOutcome::NoCandidates => vec![(MessageLevel::Warning, NO_CANDIDATES.to_string())],
        MergeOutcome::NoInputs => vec![(MessageLevel::Warning, "No files supplied!".to_string())],
        MergeOutcome::Invalid => vec![(MessageLevel::Warning, INVALID_OPTION.to_string())],
        MergeOutcome::OutputIsInput => vec![(MessageLevel::Warning, OUTPUT_IS_INPUT.to_string())],
        MergeOutcome::Cancelled => Vec::new(),
    }
}

/// Lines that close a compression: the size report, then the result.
pub fn compress_outcome_lines(outcome: &CompressOutcome, colored: bool) -> Vec<Line> {
    match outcome {
        CompressOutcome::Compressed { input, report, .. } => vec![
            (MessageLevel::Info, report.render(input, colored)),
            (MessageLevel::Success, "Compressed successfully!".to_string()),
        ],
        CompressOutcome::NoCandidates => vec![(MessageLevel::Warning, NO_CANDIDATES.to_string())],
        CompressOutcome::Invalid => vec![(MessageLevel::Warning, INVALID_OPTION.to_string())],
        CompressOutcome::OutputIsInput => {
            vec![(MessageLevel::Warning, OUTPUT_IS_INPUT.to_string())]
        }
        CompressOutcome::Cancelled => Vec::new(),
    }
}

/// Display the final message of a merge.
pub fn display_merge_outcome(formatter: &OutputFormatter, outcome: &MergeOutcome) {
    for (level, message) in merge_outcome_lines(outcome) {
        formatter.print(level, &message);
    }
}

/// Display the final message of a compression.
pub fn display_compress_outcome(formatter: &OutputFormatter, outcome: &CompressOutcome) {
    for (level, message) in compress_outcome_lines(outcome, formatter.is_colored()) {
        formatter.print(level, &message);
    }
}
