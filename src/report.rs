//! Before/after size reporting for the compress path.

use std::path::Path;

const KB: u64 = 1024;
const MB: u64 = 1024 * KB;

const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

/// Render a byte count as `B`, `KB` or `MB`.
///
/// # Examples
///
/// ```
/// use cpdf::report::format_size;
///
/// assert_eq!(format_size(500), "500 B");
/// assert_eq!(format_size(2048), "2.00 KB");
/// assert_eq!(format_size(5_242_880), "5.00 MB");
/// ```
pub fn format_size(bytes: u64) -> String {
    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} B")
    }
}

/// File sizes before and after compression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeReport {
    /// Size of the input in bytes.
    pub before: u64,
    /// Size of the output in bytes.
    pub after: u64,
}

impl SizeReport {
    /// Create a report.
    pub fn new(before: u64, after: u64) -> Self {
        Self { before, after }
    }

    /// Percentage saved, `(1 - after/before) * 100`.
    ///
    /// Positive when the file shrank, negative when it grew. An empty input
    /// reports 0.
    pub fn delta_percent(&self) -> f64 {
        if self.before == 0 {
            return 0.0;
        }
        (1.0 - self.after as f64 / self.before as f64) * 100.0
    }

    /// Render the delta: `-X.XX%` in red for a shrink, `+X.XX%` in green for
    /// growth, unadorned otherwise.
    pub fn render_delta(&self, colored: bool) -> String {
        let delta = self.delta_percent();
        let (sign, color) = if delta > 0.0 {
            ("-", RED)
        } else if delta < 0.0 {
            ("+", GREEN)
        } else {
            return format!("{:.2}%", delta.abs());
        };

        if colored {
            format!("{color}{sign}{:.2}%{RESET}", delta.abs())
        } else {
            format!("{sign}{:.2}%", delta.abs())
        }
    }

    /// Full summary line: `<input> : <before> -> <after>, <delta>`.
    pub fn render(&self, input: &Path, colored: bool) -> String {
        format!(
            "{} : {} -> {}, {}",
            input.display(),
            format_size(self.before),
            format_size(self.after),
            self.render_delta(colored)
        )
    }
}
