//! cpdf - merge or compress the PDF files in the current directory.
//!
//! The PDF work itself is done by Ghostscript. This crate discovers the
//! candidate files, asks the user what to do with them, builds the engine
//! command line and reports the result.
//!
//! # Examples
//!
//! ```no_run
//! use cpdf::app::App;
//! use cpdf::config::{Config, RunMode};
//! use cpdf::engine::ProcessRunner;
//! use cpdf::output::OutputFormatter;
//! use cpdf::prompt::TerminalPrompter;
//!
//! # async fn example() -> cpdf::Result<()> {
//! let config = Config {
//!     mode: RunMode::Merge,
//!     ..Config::default()
//! };
//! let mut app = App::new(config, TerminalPrompter::new(), ProcessRunner, OutputFormatter::new());
//! app.run().await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod app;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod files;
pub mod output;
pub mod prompt;
pub mod report;
pub mod resolve;
pub mod workflow;

// Re-export commonly used types
pub use config::Config;
pub use error::{CpdfError, Result};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
