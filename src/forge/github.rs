//! forge::github
//!
//! GitHub forge implementation using REST and GraphQL APIs.
//!
//! # Design
//!
//! - Issues come from the REST issues endpoint, paged with `page`/`per_page`.
//!   The endpoint also returns pull requests; those carry a `pull_request`
//!   key and are dropped.
//! - Discussions are only exposed through GraphQL and are paged with a
//!   cursor until `hasNextPage` is false.
//!
//! Requests are issued one at a time. Failures are mapped to
//! [`ForgeError`] and abort the listing; nothing is retried.
//!
//! # Authentication
//!
//! A token is optional. Anonymous requests work against public
//! repositories with a much lower rate limit.
//!
//! # Example
//!
//! ```ignore
//! use bugsift::core::types::RepoSlug;
//! use bugsift::forge::github::GitHubForge;
//! use bugsift::forge::{Forge, ListIssuesOpts};
//!
//! let slug = RepoSlug::parse("octocat/hello-world")?;
//! let forge = GitHubForge::new(Some(token), &slug);
//! let issues = forge.list_issues(ListIssuesOpts::default()).await?;
//! ```

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use tracing::{debug, info};

use super::traits::{Forge, ForgeError, ListIssuesOpts, ListingError};
use crate::core::config::DEFAULT_API_BASE;
use crate::core::record::{DiscussionRecord, IssueRecord};
use crate::core::types::RepoSlug;

/// User-Agent header value for API requests.
const USER_AGENT_VALUE: &str = "bugsift-cli";

/// Discussions fetched per GraphQL page.
const DISCUSSIONS_PER_PAGE: u32 = 100;

/// Paginated discussions query.
///
/// Comments are capped at the first 100 and labels at the first 10 per
/// discussion.
const DISCUSSIONS_QUERY: &str = r#"
query($owner: String!, $repo: String!, $first: Int!, $cursor: String) {
  repository(owner: $owner, name: $repo) {
    discussions(first: $first, after: $cursor) {
      pageInfo {
        hasNextPage
        endCursor
      }
      nodes {
        id
        number
        title
        body
        createdAt
        updatedAt
        closedAt
        closed
        url
        author {
          login
        }
        category {
          name
        }
        labels(first: 10) {
          nodes {
            name
          }
        }
        comments(first: 100) {
          nodes {
            id
            body
            createdAt
            author {
              login
            }
          }
        }
      }
    }
  }
}
"#;

/// GitHub forge implementation.
pub struct GitHubForge {
    /// HTTP client for making requests
    client: Client,
    /// Personal access token, if any
    token: Option<String>,
    /// Repository owner (user or organization)
    owner: String,
    /// Repository name
    repo: String,
    /// API base URL (configurable for GitHub Enterprise)
    api_base: String,
    /// GraphQL endpoint
    graphql_endpoint: String,
}

// Custom Debug to avoid exposing the token
impl std::fmt::Debug for GitHubForge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubForge")
            .field("has_token", &self.token.is_some())
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("api_base", &self.api_base)
            .field("graphql_endpoint", &self.graphql_endpoint)
            .finish()
    }
}

impl GitHubForge {
    /// Create a forge for `slug` against the public GitHub API.
    pub fn new(token: Option<String>, slug: &RepoSlug) -> Self {
        Self::with_endpoints(
            token,
            slug,
            DEFAULT_API_BASE,
            format!("{}/graphql", DEFAULT_API_BASE),
        )
    }

    /// Create a forge with explicit REST and GraphQL endpoints.
    ///
    /// Use this for GitHub Enterprise installations.
    pub fn with_endpoints(
        token: Option<String>,
        slug: &RepoSlug,
        api_base: impl Into<String>,
        graphql_endpoint: impl Into<String>,
    ) -> Self {
        let api_base: String = api_base.into();
        Self {
            client: Client::new(),
            token: token.filter(|t| !t.is_empty()),
            owner: slug.owner().to_string(),
            repo: slug.repo().to_string(),
            api_base: api_base.trim_end_matches('/').to_string(),
            graphql_endpoint: graphql_endpoint.into(),
        }
    }

    /// Get the repository owner.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Get the repository name.
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Whether requests are authenticated.
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Build common headers for API requests.
    fn headers(&self) -> Result<HeaderMap, ForgeError> {
        let mut headers = HeaderMap::new();
        if let Some(token) = &self.token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| ForgeError::AuthFailed("token contains invalid characters".into()))?;
            headers.insert(AUTHORIZATION, value);
        }
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static("2022-11-28"),
        );
        Ok(headers)
    }

    /// Build URL for a repository endpoint.
    fn repo_url(&self, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/{}",
            self.api_base, self.owner, self.repo, path
        )
    }

    /// URL of one page of the issues listing.
    fn issues_page_url(&self, opts: &ListIssuesOpts, page: u32) -> String {
        self.repo_url(&format!(
            "issues?state={}&per_page={}&page={}&sort=created&direction=desc",
            opts.state,
            opts.effective_per_page(),
            page
        ))
    }

    /// Handle API response, mapping errors appropriately.
    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: Response,
    ) -> Result<T, ForgeError> {
        let status = response.status();

        if status.is_success() {
            response.json().await.map_err(|e| ForgeError::ApiError {
                status: status.as_u16(),
                message: format!("Failed to parse response: {}", e),
            })
        } else {
            Err(self.error_from_response(response, status).await)
        }
    }

    /// Map an error response from the API.
    async fn error_from_response(&self, response: Response, status: StatusCode) -> ForgeError {
        // Rate limiting shows up as 403 with an exhausted quota header.
        let quota_exhausted = response
            .headers()
            .get("X-RateLimit-Remaining")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v == "0");

        let message = match response.json::<GitHubErrorResponse>().await {
            Ok(err) => err.message,
            Err(_) => "Unknown error".to_string(),
        };

        match status {
            StatusCode::UNAUTHORIZED => ForgeError::AuthFailed("Invalid or expired token".into()),
            StatusCode::FORBIDDEN if quota_exhausted => ForgeError::RateLimited,
            StatusCode::FORBIDDEN => {
                ForgeError::AuthFailed(format!("Permission denied: {}", message))
            }
            StatusCode::NOT_FOUND => ForgeError::NotFound(message),
            StatusCode::TOO_MANY_REQUESTS => ForgeError::RateLimited,
            _ if status.is_server_error() => ForgeError::ApiError {
                status: status.as_u16(),
                message: format!("GitHub server error: {}", message),
            },
            _ => ForgeError::ApiError {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// Fetch one page of discussions.
    async fn discussions_page(
        &self,
        cursor: Option<&str>,
    ) -> Result<DiscussionConnection, ForgeError> {
        let body = serde_json::json!({
            "query": DISCUSSIONS_QUERY,
            "variables": {
                "owner": self.owner,
                "repo": self.repo,
                "first": DISCUSSIONS_PER_PAGE,
                "cursor": cursor,
            }
        });

        debug!(endpoint = %self.graphql_endpoint, ?cursor, "requesting discussions page");

        let response = self
            .client
            .post(&self.graphql_endpoint)
            .headers(self.headers()?)
            .json(&body)
            .send()
            .await
            .map_err(|e| ForgeError::NetworkError(e.to_string()))?;

        let result: GraphQLResponse<DiscussionsData> = self.handle_response(response).await?;

        if let Some(errors) = result.errors {
            if let Some(first) = errors.first() {
                return Err(ForgeError::ApiError {
                    status: 200,
                    message: first.message.clone(),
                });
            }
        }

        result
            .data
            .and_then(|d| d.repository)
            .map(|r| r.discussions)
            .ok_or_else(|| ForgeError::NotFound(format!("{}/{}", self.owner, self.repo)))
    }

    /// Append every issue page to `issues`, stopping at the first failure.
    async fn collect_issues(
        &self,
        opts: &ListIssuesOpts,
        issues: &mut Vec<IssueRecord>,
    ) -> Result<(), ForgeError> {
        let per_page = opts.effective_per_page() as usize;
        let mut page: u32 = 1;

        info!(
            "Fetching {} issues from {}/{}...",
            opts.state, self.owner, self.repo
        );

        loop {
            let url = self.issues_page_url(opts, page);
            debug!(%url, "requesting issues page");

            let response = self
                .client
                .get(&url)
                .headers(self.headers()?)
                .send()
                .await
                .map_err(|e| ForgeError::NetworkError(e.to_string()))?;

            let items: Vec<GitHubIssueItem> = self.handle_response(response).await?;
            if items.is_empty() {
                break;
            }

            // Page length counts pull requests too, so measure before filtering.
            let page_len = items.len();
            let page_issues: Vec<IssueRecord> = items
                .into_iter()
                .filter(|item| item.pull_request.is_none())
                .map(|item| item.issue)
                .collect();

            info!("  Fetched page {}: {} issues", page, page_issues.len());
            issues.extend(page_issues);

            if page_len < per_page {
                break;
            }
            page += 1;
        }

        Ok(())
    }

    /// Append every discussion page to `discussions`, following the cursor.
    async fn collect_discussions(
        &self,
        discussions: &mut Vec<DiscussionRecord>,
    ) -> Result<(), ForgeError> {
        let mut cursor: Option<String> = None;

        info!("Fetching discussions from {}/{}...", self.owner, self.repo);

        loop {
            let connection = self.discussions_page(cursor.as_deref()).await?;

            info!("  Fetched {} discussions", connection.nodes.len());
            discussions.extend(connection.nodes);

            match connection.page_info {
                PageInfo {
                    has_next_page: true,
                    end_cursor: Some(next),
                } => cursor = Some(next),
                _ => break,
            }
        }

        Ok(())
    }
}

#[async_trait]
impl Forge for GitHubForge {
    fn name(&self) -> &'static str {
        "github"
    }

    async fn list_issues(
        &self,
        opts: ListIssuesOpts,
    ) -> Result<Vec<IssueRecord>, ListingError<IssueRecord>> {
        let mut issues = Vec::new();
        let result = self.collect_issues(&opts, &mut issues).await;
        ListingError::finish(issues, result)
    }

    async fn list_discussions(
        &self,
    ) -> Result<Vec<DiscussionRecord>, ListingError<DiscussionRecord>> {
        let mut discussions = Vec::new();
        let result = self.collect_discussions(&mut discussions).await;
        ListingError::finish(discussions, result)
    }
}

// --------------------------------------------------------------------------
// API Response Types
// --------------------------------------------------------------------------

/// GitHub error response format.
#[derive(Deserialize)]
struct GitHubErrorResponse {
    message: String,
}

/// One item of the issues listing.
///
/// The listing mixes issues and pull requests; only pull requests carry
/// `pull_request`.
#[derive(Deserialize)]
struct GitHubIssueItem {
    #[serde(flatten)]
    issue: IssueRecord,
    #[serde(default)]
    pull_request: Option<serde_json::Value>,
}

/// GraphQL response wrapper.
#[derive(Deserialize)]
struct GraphQLResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQLError>>,
}

/// GraphQL error format.
#[derive(Deserialize)]
struct GraphQLError {
    message: String,
}

#[derive(Deserialize)]
struct DiscussionsData {
    repository: Option<RepositoryDiscussions>,
}

#[derive(Deserialize)]
struct RepositoryDiscussions {
    discussions: DiscussionConnection,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DiscussionConnection {
    page_info: PageInfo,
    nodes: Vec<DiscussionRecord>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageInfo {
    has_next_page: bool,
    end_cursor: Option<String>,
}
