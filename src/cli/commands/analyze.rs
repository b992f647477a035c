//! analyze command - Classify archived bug issues and print a report

use std::path::PathBuf;

use anyhow::{anyhow, Result};

use super::Context;
use crate::analysis::Classifier;
use crate::archive::IssueDirectory;
use crate::cli::args::AnalyzeArgs;
use crate::core::config::Config;
use crate::core::paths::ArchivePaths;
use crate::core::types::RepoSlug;
use crate::ui::output::{self, Verbosity};
use crate::ui::report::{render_report, report_title};

/// Where to read issues from, and the repository they belong to if known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeInput {
    pub issues_dir: PathBuf,
    pub repo: Option<RepoSlug>,
}

/// Resolve the issue directory from flags and config.
///
/// `--issues-dir` wins. Otherwise the repository comes from the argument
/// or `default_repo`, and the directory is its archive's `issues/`.
pub fn resolve_input(args: &AnalyzeArgs, config: &Config) -> Result<AnalyzeInput> {
    let repo = match &args.repo {
        Some(repo) => Some(RepoSlug::parse(repo)?),
        None => config.default_repo(),
    };

    if let Some(dir) = &args.issues_dir {
        return Ok(AnalyzeInput {
            issues_dir: dir.clone(),
            repo,
        });
    }

    let repo = repo.ok_or_else(|| {
        anyhow!("No repository given. Pass owner/repo, use --issues-dir, or set default_repo.")
    })?;
    let data_dir = args.data_dir.clone().unwrap_or_else(|| config.data_dir());
    Ok(AnalyzeInput {
        issues_dir: ArchivePaths::new(&data_dir, &repo).issues_dir(),
        repo: Some(repo),
    })
}

/// Load bug issues from `input` and render the report.
pub fn build_report(input: &AnalyzeInput, label: &str, verbosity: Verbosity) -> Result<String> {
    let dir = IssueDirectory::open(&input.issues_dir)?;

    output::print("Loading bug issues...", verbosity);
    let outcome = dir.load_bug_issues(label)?;
    if !outcome.skipped.is_empty() {
        output::warn(
            format!(
                "{} of {} issue files could not be loaded",
                outcome.skipped.len(),
                outcome.scanned
            ),
            verbosity,
        );
    }
    output::print(format!("Found {} bug issues", outcome.issues.len()), verbosity);

    let analysis = Classifier::standard()?.analyze(&outcome.issues);
    let title = report_title(input.repo.as_ref().map(|r| r.repo()));
    Ok(render_report(&title, &outcome.issues, &analysis))
}

/// Classify archived bug issues and print the report.
pub fn analyze(ctx: &Context, args: &AnalyzeArgs) -> Result<()> {
    let input = resolve_input(args, &ctx.config)?;
    let label = args
        .label
        .as_deref()
        .unwrap_or_else(|| ctx.config.bug_label());

    let report = build_report(&input, label, ctx.verbosity)?;
    print!("{}", report);
    Ok(())
}
