//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// bugsift - fetch GitHub issues and classify bug reports
#[derive(Parser, Debug)]
#[command(name = "bugsift")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output; only warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Download issues and discussions into the local archive
    #[command(
        name = "fetch",
        long_about = "Download every issue and discussion of a GitHub repository.\n\n\
            Issues come from the REST API (pull requests are dropped), discussions \
            from the GraphQL API. Each record is stored as pretty-printed JSON under \
            <output>/<owner>_<repo>/ together with rollup summaries.\n\n\
            A token is read from --token or GITHUB_TOKEN. Without one, requests are \
            anonymous and subject to much lower rate limits; the discussions API \
            requires a token.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Fetch everything into ./github_data
    bugsift fetch Mentra-Community/MentraOS

    # Issues only, into a custom directory
    bugsift fetch owner/repo --issues-only -o ./archive

    # Only closed issues
    bugsift fetch owner/repo --issues-only --state closed

    # Against a GitHub Enterprise host
    bugsift fetch owner/repo --api-base https://ghe.example.com/api/v3"
    )]
    Fetch(FetchArgs),

    /// Classify archived bug issues and print a report
    #[command(
        name = "analyze",
        long_about = "Classify archived bug issues and print a report.\n\n\
            Loads every issue_<n>.json carrying the bug label, assigns topical \
            categories, platform, hardware model and the testing strategy needed \
            to catch each bug, then prints counts and percentages.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Analyze a fetched repository
    bugsift analyze Mentra-Community/MentraOS

    # Analyze an arbitrary directory of issue files
    bugsift analyze --issues-dir ./github_data/owner_repo/issues

    # Use a different label to select bugs
    bugsift analyze owner/repo --label defect"
    )]
    Analyze(AnalyzeArgs),

    /// Get or set configuration values
    #[command(
        name = "config",
        long_about = "Get or set configuration values.\n\n\
            Configuration is stored in ~/.bugsift/config.toml (or the file named by \
            BUGSIFT_CONFIG). Command-line flags always take precedence.",
        after_help = "\
WORKFLOW EXAMPLES:
    # List all configuration values
    bugsift config list

    # Set the repository analyze uses by default
    bugsift config set default_repo owner/repo

    # Get a specific value
    bugsift config get data_dir"
    )]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        after_help = "\
WORKFLOW EXAMPLES:
    # Bash (add to ~/.bashrc)
    bugsift completion bash >> ~/.bashrc

    # Zsh (add to ~/.zshrc)
    bugsift completion zsh >> ~/.zshrc"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for `fetch`.
#[derive(Args, Debug, Clone)]
pub struct FetchArgs {
    /// Repository as owner/repo
    pub repo: String,

    /// Output directory [default: config data_dir or ./github_data]
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// GitHub token [default: $GITHUB_TOKEN]
    #[arg(short, long, value_name = "TOKEN")]
    pub token: Option<String>,

    /// Only fetch issues
    #[arg(long, conflicts_with = "discussions_only")]
    pub issues_only: bool,

    /// Only fetch discussions
    #[arg(long)]
    pub discussions_only: bool,

    /// Which issues to fetch by state
    #[arg(long, value_enum, default_value_t = StateArg::All)]
    pub state: StateArg,

    /// REST API base URL
    #[arg(long, value_name = "URL")]
    pub api_base: Option<String>,
}

/// Arguments for `analyze`.
#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Repository as owner/repo [default: config default_repo]
    pub repo: Option<String>,

    /// Archive root [default: config data_dir or ./github_data]
    #[arg(short, long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Read issue files from this directory instead of the archive
    #[arg(long, value_name = "DIR")]
    pub issues_dir: Option<PathBuf>,

    /// Label selecting bug issues [default: config bug_label or "bug"]
    #[arg(long, value_name = "NAME")]
    pub label: Option<String>,
}

/// Config subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },
    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// Value to set
        value: String,
    },
    /// List all configuration values
    List,
}

/// Issue states accepted by `fetch --state`
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateArg {
    All,
    Open,
    Closed,
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
