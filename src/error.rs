//! Error types for cpdf.
//!
//! Every variant here is fatal: it propagates up to `main`, which prints the
//! diagnostic and exits with [`CpdfError::exit_code`]. Outcomes the user can
//! recover from (an empty merge selection, a declined overwrite, an
//! unrecognized menu answer) are not errors and live in the workflow types.
//!
//! # Error Categories
//!
//! - **Filesystem**: listing candidates, reading file sizes
//! - **Interaction**: prompt I/O failures
//! - **Validation**: an out-of-set compression profile
//! - **Engine**: the external engine could not be found, launched, or failed

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

/// Result type alias for cpdf operations.
pub type Result<T> = std::result::Result<T, CpdfError>;

/// Main error type for cpdf operations.
#[derive(Debug, thiserror::Error)]
pub enum CpdfError {
    /// The candidate glob pattern could not be compiled.
    #[error("Failed to parse file pattern: {0}")]
    ListFilesPattern(#[from] glob::PatternError),

    /// A directory entry could not be read while listing candidates.
    #[error("Failed to list PDF files: {0}")]
    ListFiles(#[from] glob::GlobError),

    /// Size of a file could not be determined.
    #[error("Failed to read size of {}\n  Reason: {source}", path.display())]
    FileSize {
        /// Path that could not be inspected.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A prompt failed or was interrupted.
    #[error("Failed to read input: {source}")]
    Prompt {
        /// Underlying I/O error from the terminal.
        source: io::Error,
    },

    /// A compression profile name outside the supported set.
    #[error(
        "Invalid compression profile: {name}. Must be one of: ebook, screen, printer, prepress, default"
    )]
    InvalidProfile {
        /// The rejected name.
        name: String,
    },

    /// The engine binary is not on `PATH`.
    #[error(
        "Could not find '{program}' on PATH\n  Hint: install Ghostscript or point --engine / CPDF_ENGINE at it"
    )]
    EngineNotFound {
        /// Program that was looked up.
        program: String,
    },

    /// The engine process could not be started.
    #[error("Failed to launch {}\n  Reason: {source}", program.display())]
    EngineLaunch {
        /// Program that failed to start.
        program: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The engine ran but exited unsuccessfully.
    #[error("Error executing {}: {status}{}", program.display(), format_stderr(stderr))]
    EngineFailed {
        /// Program that failed.
        program: PathBuf,
        /// Exit status reported by the OS.
        status: ExitStatus,
        /// Captured standard error, possibly empty.
        stderr: String,
    },

    /// Generic I/O error.
    #[error("I/O error: {source}")]
    Io {
        /// Underlying I/O error.
        #[from]
        source: io::Error,
    },
}

fn format_stderr(stderr: &str) -> String {
    let stderr = stderr.trim();
    if stderr.is_empty() {
        String::new()
    } else {
        format!("\n  Engine output: {stderr}")
    }
}

impl From<dialoguer::Error> for CpdfError {
    fn from(err: dialoguer::Error) -> Self {
        match err {
            dialoguer::Error::IO(source) => Self::Prompt { source },
        }
    }
}

impl CpdfError {
    /// Create a FileSize error.
    pub fn file_size(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileSize {
            path: path.into(),
            source,
        }
    }

    /// Create an InvalidProfile error.
    pub fn invalid_profile(name: impl Into<String>) -> Self {
        Self::InvalidProfile { name: name.into() }
    }

    /// Create a Prompt error from an I/O error.
    pub fn prompt(source: io::Error) -> Self {
        Self::Prompt { source }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ListFilesPattern(_) => 2,
            Self::ListFiles(_) => 2,
            Self::FileSize { .. } => 2,
            Self::Io { .. } => 2,
            Self::Prompt { .. } => 3,
            Self::InvalidProfile { .. } => 1,
            Self::EngineNotFound { .. } => 4,
            Self::EngineLaunch { .. } => 4,
            Self::EngineFailed { .. } => 5,
        }
    }
}
