//! cli
//!
//! Command-line interface layer for bugsift.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Load configuration
//! - Delegate to command handlers
//!
//! The CLI layer is thin: fetching lives in [`crate::forge`] and
//! [`crate::archive`], classification in [`crate::analysis`], rendering in
//! [`crate::ui`].

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use crate::core::config::Config;
use crate::ui::output::Verbosity;
use anyhow::{Context as _, Result};

/// Run the CLI with already-parsed arguments.
///
/// This is the main entry point called from `main.rs`.
pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load().context("Failed to load configuration")?;

    let ctx = commands::Context {
        verbosity: Verbosity::from_flags(cli.quiet, cli.debug),
        config,
    };

    commands::dispatch(cli.command, &ctx)
}
