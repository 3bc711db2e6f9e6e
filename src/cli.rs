//! CLI argument parsing for cpdf.
//!
//! This module only depends on `clap` so that `build.rs` can include it to
//! render the man page. Conversion into the runtime [`Config`] lives in
//! `config.rs`.
//!
//! [`Config`]: crate::config::Config

use clap::Parser;
use std::path::PathBuf;

/// Merge or compress the PDF files in the current directory.
///
/// Without flags cpdf shows an interactive menu and keeps running until
/// "Exit" is chosen. The heavy lifting is done by Ghostscript.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "cpdf")]
#[command(about = "Merge or compress the PDF files in the current directory", long_about = None)]
#[command(author)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Compress a single PDF, then exit
    ///
    /// Still prompts for the input file, output name and profile.
    /// Takes precedence over --merge.
    #[arg(short, long)]
    pub compress: bool,

    /// Merge several PDFs into one, then exit
    ///
    /// Still prompts for the input files and output name.
    #[arg(short, long)]
    pub merge: bool,

    /// Print version, commit, build source and platform, then exit
    ///
    /// Overrides every other flag.
    #[arg(short = 'v', long)]
    pub version: bool,

    /// Ghostscript executable to invoke
    #[arg(long, value_name = "PATH", env = "CPDF_ENGINE", default_value = "gs")]
    pub engine: PathBuf,
}
