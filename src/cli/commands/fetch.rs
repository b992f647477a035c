//! fetch command - Download issues and discussions into the archive
//!
//! The handler is synchronous; network work runs on a tokio runtime
//! created here. Requests are issued one after another.
//!
//! A listing that fails keeps whatever it fetched before the failure and the
//! archive is still written. The command only fails when nothing at all was
//! fetched.

use std::path::PathBuf;

use anyhow::{bail, Context as _, Result};
use chrono::{DateTime, Utc};
use tracing::{info, warn};

use super::Context;
use crate::archive::summary::CombinedSummary;
use crate::archive::ArchiveWriter;
use crate::cli::args::{FetchArgs, StateArg};
use crate::core::record::{DiscussionRecord, IssueRecord};
use crate::core::types::RepoSlug;
use crate::forge::github::GitHubForge;
use crate::forge::{Forge, ListIssuesOpts, ListingError, StateFilter};
use crate::ui::output;

/// Environment variable consulted when `--token` is absent.
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Which records to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchScope {
    pub issues: bool,
    pub discussions: bool,
    pub issue_state: StateFilter,
}

impl FetchScope {
    pub fn from_flags(issues_only: bool, discussions_only: bool) -> Self {
        Self {
            issues: !discussions_only,
            discussions: !issues_only,
            issue_state: StateFilter::All,
        }
    }

    pub fn with_issue_state(self, issue_state: StateFilter) -> Self {
        Self {
            issue_state,
            ..self
        }
    }
}

impl From<StateArg> for StateFilter {
    fn from(arg: StateArg) -> Self {
        match arg {
            StateArg::All => StateFilter::All,
            StateArg::Open => StateFilter::Open,
            StateArg::Closed => StateFilter::Closed,
        }
    }
}

/// Records returned by the forge.
#[derive(Debug, Clone, Default)]
pub struct Fetched {
    pub issues: Vec<IssueRecord>,
    pub discussions: Vec<DiscussionRecord>,
}

impl Fetched {
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty() && self.discussions.is_empty()
    }
}

/// `--token`, else `$GITHUB_TOKEN`. Empty values count as absent.
pub fn resolve_token(flag: Option<String>, env: Option<String>) -> Option<String> {
    flag.or(env).filter(|t| !t.trim().is_empty())
}

/// Fetch the requested records from `forge`.
///
/// A failed listing is logged and its partial records are kept.
///
/// # Errors
///
/// Fails with the first listing error when a listing failed and no records
/// of any kind were fetched.
pub async fn fetch_records(forge: &dyn Forge, scope: FetchScope) -> Result<Fetched> {
    let mut fetched = Fetched::default();
    let mut first_failure = None;

    if scope.issues {
        info!("Fetching issues...");
        let opts = ListIssuesOpts {
            state: scope.issue_state,
            ..Default::default()
        };
        fetched.issues = keep_partial(
            "issues",
            forge.list_issues(opts).await,
            &mut first_failure,
        );
        info!("Fetched {} issues", fetched.issues.len());
    }

    if scope.discussions {
        info!("Fetching discussions...");
        fetched.discussions = keep_partial(
            "discussions",
            forge.list_discussions().await,
            &mut first_failure,
        );
        info!("Fetched {} discussions", fetched.discussions.len());
    }

    match first_failure {
        Some(err) if fetched.is_empty() => Err(err),
        _ => Ok(fetched),
    }
}

/// Records of a listing, partial ones included. The first failure is kept
/// in `first_failure`.
fn keep_partial<T>(
    kind: &str,
    listing: Result<Vec<T>, ListingError<T>>,
    first_failure: &mut Option<anyhow::Error>,
) -> Vec<T> {
    match listing {
        Ok(records) => records,
        Err(ListingError { fetched, error }) => {
            warn!(
                "Failed to fetch {}: {}; keeping {} already fetched",
                kind,
                error,
                fetched.len()
            );
            if first_failure.is_none() {
                let err = anyhow::Error::new(error).context(format!("Failed to fetch {}", kind));
                *first_failure = Some(err);
            }
            fetched
        }
    }
}

/// Fetch from `forge` and write the archive.
///
/// # Errors
///
/// Fails if nothing at all was fetched or if the archive cannot be
/// written.
pub async fn fetch_into(
    forge: &dyn Forge,
    writer: &ArchiveWriter,
    scope: FetchScope,
    fetched_at: DateTime<Utc>,
) -> Result<CombinedSummary> {
    let fetched = fetch_records(forge, scope).await?;
    if fetched.is_empty() {
        bail!("No data fetched");
    }

    writer
        .write(&fetched.issues, &fetched.discussions, fetched_at)
        .context("Failed to write archive")
}

/// Fetch a repository into the local archive.
pub fn fetch(ctx: &Context, args: &FetchArgs) -> Result<()> {
    let slug = RepoSlug::parse(&args.repo)?;
    let mut scope = FetchScope::from_flags(args.issues_only, args.discussions_only)
        .with_issue_state(args.state.into());

    let token = resolve_token(args.token.clone(), std::env::var(TOKEN_ENV).ok());
    if token.is_none() {
        output::warn(
            format!(
                "No GitHub token provided. Rate limits will be lower.\n   \
                 Set {} or use --token.",
                TOKEN_ENV
            ),
            ctx.verbosity,
        );
        if scope.discussions {
            output::warn(
                "Discussions require a token; skipping discussions.",
                ctx.verbosity,
            );
            scope.discussions = false;
        }
    }

    let (api_base, graphql_endpoint) = endpoints(ctx, args);
    let forge = GitHubForge::with_endpoints(token, &slug, api_base, graphql_endpoint);

    let data_dir: PathBuf = args
        .output
        .clone()
        .unwrap_or_else(|| ctx.config.data_dir());
    let writer = ArchiveWriter::new(&data_dir, slug.clone());

    output::print(format!("Fetching {}...", slug), ctx.verbosity);

    let rt = tokio::runtime::Runtime::new()?;
    let summary = rt.block_on(fetch_into(&forge, &writer, scope, Utc::now()))?;

    output::print(
        format!(
            "\nData saved to {}\nIssues: {}\nDiscussions: {}",
            writer.paths().base_dir.display(),
            output::format_counts(&summary.issues),
            output::format_counts(&summary.discussions),
        ),
        ctx.verbosity,
    );
    Ok(())
}

/// REST base and GraphQL endpoint. `--api-base` overrides config, and the
/// GraphQL endpoint follows it.
fn endpoints(ctx: &Context, args: &FetchArgs) -> (String, String) {
    match &args.api_base {
        Some(base) => {
            let base = base.trim_end_matches('/').to_string();
            let graphql = format!("{}/graphql", base);
            (base, graphql)
        }
        None => (
            ctx.config.api_base().to_string(),
            ctx.config.graphql_endpoint(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_flags() {
        assert_eq!(
            FetchScope::from_flags(false, false),
            FetchScope {
                issues: true,
                discussions: true,
                issue_state: StateFilter::All,
            }
        );
        assert!(!FetchScope::from_flags(true, false).discussions);
        assert!(!FetchScope::from_flags(false, true).issues);
    }

    #[test]
    fn state_flag_narrows_issue_listing() {
        let scope = FetchScope::from_flags(true, false).with_issue_state(StateArg::Open.into());
        assert_eq!(scope.issue_state, StateFilter::Open);
        assert!(scope.issues);
        assert_eq!(StateFilter::from(StateArg::Closed), StateFilter::Closed);
    }

    #[test]
    fn token_precedence() {
        assert_eq!(
            resolve_token(Some("flag".into()), Some("env".into())),
            Some("flag".to_string())
        );
        assert_eq!(resolve_token(None, Some("env".into())), Some("env".to_string()));
        assert_eq!(resolve_token(None, Some("  ".into())), None);
        assert_eq!(resolve_token(None, None), None);
    }
}
