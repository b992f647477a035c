//! ui::output
//!
//! User-facing output.
//!
//! Messages meant for the user go to stdout (warnings and errors to
//! stderr) and respect `--quiet`. Diagnostics go through `tracing`
//! instead; [`Verbosity::log_directive`] keeps the two in step.

use std::fmt::Display;

use crate::archive::summary::Counts;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags. `quiet` wins over `debug`.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }

    /// Default `tracing` filter directive for this verbosity.
    pub fn log_directive(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "bugsift=warn",
            Verbosity::Normal => "bugsift=info",
            Verbosity::Debug => "bugsift=debug",
        }
    }
}

/// Print a message (respects quiet mode).
pub fn print(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Print a warning message (respects quiet mode).
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("warning: {}", message);
    }
}

/// `"12 (7 open, 5 closed)"`
pub fn format_counts(counts: &Counts) -> String {
    format!(
        "{} ({} open, {} closed)",
        counts.total, counts.open, counts.closed
    )
}
