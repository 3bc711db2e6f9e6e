//! Message formatting and display.
//!
//! # Examples
//!
//! ```
//! use cpdf::output::formatter::OutputFormatter;
//!
//! let formatter = OutputFormatter::plain();
//! formatter.info("Merging...");
//! formatter.success("Merged successfully!");
//! formatter.warning("No files supplied!");
//! ```

use std::io;

/// Level of output message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Informational message.
    Info,
    /// Success message.
    Success,
    /// Warning message.
    Warning,
    /// Error message.
    Error,
}

impl MessageLevel {
    fn prefix_and_color(self) -> (&'static str, &'static str) {
        match self {
            Self::Info => ("", ""),
            Self::Success => ("✓ ", "\x1b[32m"), // Green
            Self::Warning => ("⚠ ", "\x1b[33m"), // Yellow
            Self::Error => ("✗ ", "\x1b[31m"),   // Red
        }
    }
}

/// User-facing output on stdout.
#[derive(Debug, Clone, Copy)]
pub struct OutputFormatter {
    /// Whether to use colored output.
    colored: bool,
}

impl OutputFormatter {
    /// Create a formatter that colors output when stdout is a terminal.
    pub fn new() -> Self {
        Self {
            colored: Self::should_use_color(),
        }
    }

    /// Create a formatter that never emits escape codes.
    pub fn plain() -> Self {
        Self { colored: false }
    }

    /// Returns true if stdout is a TTY and TERM is set.
    fn should_use_color() -> bool {
        use std::io::IsTerminal;
        io::stdout().is_terminal() && std::env::var("TERM").is_ok()
    }

    /// Whether escape codes are emitted.
    pub fn is_colored(&self) -> bool {
        self.colored
    }

    /// Print a message at `level`. Errors go to stderr, the rest to stdout.
    pub fn print(&self, level: MessageLevel, message: &str) {
        let line = self.format(level, message);
        match level {
            MessageLevel::Error => eprintln!("{line}"),
            _ => println!("{line}"),
        }
    }

    /// Print an informational message.
    pub fn info(&self, message: &str) {
        self.print(MessageLevel::Info, message);
    }

    /// Print a success message.
    pub fn success(&self, message: &str) {
        self.print(MessageLevel::Success, message);
    }

    /// Print a warning message.
    pub fn warning(&self, message: &str) {
        self.print(MessageLevel::Warning, message);
    }

    /// Print an error message to stderr.
    pub fn error(&self, message: &str) {
        self.print(MessageLevel::Error, message);
    }

    /// Print a section header.
    pub fn section(&self, title: &str) {
        println!("\n{title}");
    }

    /// Render a message with level-appropriate prefix and color.
    pub fn format(&self, level: MessageLevel, message: &str) -> String {
        let (prefix, color_code) = level.prefix_and_color();
        let reset = "\x1b[0m";

        if self.colored && !color_code.is_empty() {
            format!("{color_code}{prefix}{message}{reset}")
        } else {
            format!("{prefix}{message}")
        }
    }
}

impl Default for OutputFormatter {
    fn default() -> Self {
        Self::new()
    }
}
