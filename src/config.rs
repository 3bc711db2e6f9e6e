//! Configuration module for cpdf.
//!
//! This module turns parsed CLI flags into an immutable [`Config`] that the
//! dispatcher receives by value. It also holds the fixed set of compression
//! profiles and the build metadata printed by `--version`.

use std::ffi::OsStr;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::cli::Cli;
use crate::error::{CpdfError, Result};

/// What the process should do after parsing flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// Print build metadata and exit.
    Version,
    /// Run the compress flow once.
    Compress,
    /// Run the merge flow once.
    Merge,
    /// Loop over the operation menu until the user exits.
    #[default]
    Interactive,
}

/// Validated runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Selected run mode.
    pub mode: RunMode,
    /// Engine program, either a bare name looked up on `PATH` or a path.
    pub engine: PathBuf,
}

impl Config {
    /// Default engine program.
    pub const DEFAULT_ENGINE: &'static str = "gs";
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: RunMode::default(),
            engine: PathBuf::from(Self::DEFAULT_ENGINE),
        }
    }
}

impl From<&Cli> for Config {
    /// `--version` wins over everything, then `--compress`, then `--merge`.
    fn from(cli: &Cli) -> Self {
        let mode = if cli.version {
            RunMode::Version
        } else if cli.compress {
            RunMode::Compress
        } else if cli.merge {
            RunMode::Merge
        } else {
            RunMode::Interactive
        };

        let engine = if cli.engine.as_os_str().is_empty() {
            PathBuf::from(Self::DEFAULT_ENGINE)
        } else {
            cli.engine.clone()
        };

        Self { mode, engine }
    }
}

/// Whether `args` ask for the version, even if they would not parse.
///
/// Looks for `--version` or a short cluster containing `v` (`-v`, `-cv`).
/// The value after `--engine` and everything after `--` is skipped.
pub fn version_requested<I, S>(args: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut skip_value = false;
    for arg in args.into_iter().skip(1) {
        let Some(arg) = arg.as_ref().to_str() else {
            continue;
        };
        if skip_value {
            skip_value = false;
            continue;
        }
        match arg {
            "--" => break,
            "--version" => return true,
            "--engine" => skip_value = true,
            _ if arg.starts_with("--") => {}
            _ if arg.starts_with('-') && arg[1..].contains('v') => return true,
            _ => {}
        }
    }
    false
}

/// Ghostscript `-dPDFSETTINGS` preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompressionProfile {
    /// Medium resolution, good for e-readers.
    Ebook,
    /// Lowest resolution, smallest output.
    Screen,
    /// High quality for desktop printing.
    Printer,
    /// Prepress quality, preserves color.
    Prepress,
    /// Ghostscript's general-purpose default.
    Default,
}

impl CompressionProfile {
    /// Every profile, in the order they are offered to the user.
    pub const ALL: [CompressionProfile; 5] = [
        Self::Ebook,
        Self::Screen,
        Self::Printer,
        Self::Prepress,
        Self::Default,
    ];

    /// Name used in `-dPDFSETTINGS=/<name>`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ebook => "ebook",
            Self::Screen => "screen",
            Self::Printer => "printer",
            Self::Prepress => "prepress",
            Self::Default => "default",
        }
    }
}

impl fmt::Display for CompressionProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompressionProfile {
    type Err = CpdfError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|profile| profile.as_str() == s)
            .ok_or_else(|| CpdfError::invalid_profile(s))
    }
}

/// Build metadata reported by `--version`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    /// Crate version.
    pub version: &'static str,
    /// Short git commit the binary was built from.
    pub commit: &'static str,
    /// Where the build came from (CI, distro package, local).
    pub source: &'static str,
    /// Target operating system.
    pub os: &'static str,
    /// Target architecture.
    pub arch: &'static str,
}

impl BuildInfo {
    /// Metadata of the running binary.
    pub fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            commit: option_env!("CPDF_GIT_COMMIT").unwrap_or("unknown"),
            source: option_env!("CPDF_BUILD_SOURCE").unwrap_or("unknown"),
            os: std::env::consts::OS,
            arch: std::env::consts::ARCH,
        }
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} v{}@{}, {}, {}/{}",
            crate::NAME,
            self.version,
            self.commit,
            self.source,
            self.os,
            self.arch
        )
    }
}
