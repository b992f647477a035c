//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Validates command-specific arguments
//! 2. Calls into `forge`, `archive` or `analysis`
//! 3. Formats and displays output
//!
//! # Async Commands
//!
//! `fetch` involves network I/O. Its handler creates a tokio runtime and
//! blocks on the async implementation, so dispatch stays synchronous.

mod analyze;
mod completion;
mod config_cmd;
mod fetch;

// Re-export command functions for testing and direct invocation
pub use analyze::{analyze, build_report, resolve_input, AnalyzeInput};
pub use completion::{completion, write_completion};
pub use config_cmd::{get as config_get, list as config_list, set as config_set, set_in};
pub use fetch::{
    fetch, fetch_into, fetch_records, resolve_token, FetchScope, Fetched, TOKEN_ENV,
};

use crate::cli::args::{Command, ConfigAction};
use crate::core::config::Config;
use crate::ui::output::Verbosity;
use anyhow::Result;

/// State shared by every command handler.
#[derive(Debug, Clone)]
pub struct Context {
    pub verbosity: Verbosity,
    pub config: Config,
}

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Fetch(args) => fetch::fetch(ctx, &args),
        Command::Analyze(args) => analyze::analyze(ctx, &args),
        Command::Config { action } => match action {
            ConfigAction::Get { key } => config_cmd::get(ctx, &key),
            ConfigAction::Set { key, value } => config_cmd::set(ctx, &key, &value),
            ConfigAction::List => config_cmd::list(ctx),
        },
        Command::Completion { shell } => completion::completion(shell),
    }
}
