//! Octocrab-based GitHub API client
//!
//! This module wraps the octocrab library behind the small set of
//! operations the repository tools need. Typed handlers are used where
//! they carry everything the tools report; the single-repository and
//! `/search/repositories` routes go through octocrab's generic `get`
//! because the typed models drop the subscriber count and the relevance
//! score respectively.

use octocrab::Octocrab;
use octocrab::models::Repository;
use octocrab::models::repos::ContentItems;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::params::{RepositoryFilter, SearchSortKey, SortDirection};

/// Page size requested from the provider when walking paginated routes.
const PROVIDER_PAGE_SIZE: u8 = 100;

/// The provider serves at most this many search results per query.
const SEARCH_RESULT_CAP: u64 = 1000;

/// A failed exchange with the GitHub API
///
/// The two variants separate requests GitHub answered with a structured
/// rejection from exchanges that never produced one (connection failures,
/// malformed routes, undecodable response bodies). The contents tool
/// reports the latter in-band instead of raising them.
#[derive(Debug, Error)]
pub enum GithubApiError {
    /// GitHub rejected the request (bad credentials, not found, rate
    /// limit, validation); carries the provider's own message.
    #[error("{message}")]
    Rejected { message: String },

    /// The exchange failed before a structured provider response was
    /// available.
    #[error("{detail}")]
    Exchange { detail: String },
}

impl From<octocrab::Error> for GithubApiError {
    fn from(err: octocrab::Error) -> Self {
        match err {
            octocrab::Error::GitHub { source, .. } => GithubApiError::Rejected {
                message: source.message,
            },
            other => GithubApiError::Exchange {
                detail: other.to_string(),
            },
        }
    }
}

/// Repository search results with the provider's approximate total
#[derive(Debug)]
pub struct RepositorySearchResults {
    /// Approximate total number of matches, as reported by the provider
    pub approx_total: Option<u64>,
    /// Matching repositories with their relevance scores
    pub items: Vec<ScoredRepository>,
}

/// A search hit: the repository object plus its relevance score
///
/// The score only exists on the search route, so it is captured here
/// alongside the flattened repository object rather than on the
/// repository model itself.
#[derive(Debug, Deserialize)]
pub struct ScoredRepository {
    /// Relevance score for the search query, when reported
    pub score: Option<f64>,

    /// The repository object itself
    #[serde(flatten)]
    pub repository: Repository,
}

/// A single-repository payload with its true watcher count
///
/// The repository object's own `watchers_count` is a legacy alias of the
/// star count; the `/repos/{owner}/{repo}` response carries the real
/// figure as `subscribers_count`, which the typed model drops.
#[derive(Debug, Deserialize)]
pub struct RepositoryWithWatchers {
    /// Number of users subscribed to (watching) the repository
    pub subscribers_count: Option<u64>,

    /// The repository object itself
    #[serde(flatten)]
    pub repository: Repository,
}

#[derive(Serialize)]
struct SearchReposQuery<'a> {
    q: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    sort: Option<String>,
    order: String,
    per_page: u8,
    page: u32,
}

#[derive(Debug, Deserialize)]
struct SearchReposPage {
    total_count: Option<u64>,
    items: Vec<ScoredRepository>,
}

#[derive(Debug, Deserialize)]
struct LicensePayload {
    license: Option<LicenseDescriptor>,
}

#[derive(Debug, Deserialize)]
struct LicenseDescriptor {
    spdx_id: Option<String>,
}

/// GitHub API client for the repository tools
///
/// Holds a single authenticated octocrab instance for the process
/// lifetime. The client is cheap to clone and carries no per-request
/// state; every operation is an independent request/response exchange.
#[derive(Debug, Clone)]
pub struct GithubClient {
    client: Octocrab,
}

impl GithubClient {
    /// Creates a new client authenticated with the given token
    pub fn new(github_token: String) -> Result<Self, String> {
        let client = Octocrab::builder()
            .personal_token(github_token)
            .build()
            .map_err(|e| format!("Failed to create octocrab client: {}", e))?;

        Ok(Self { client })
    }

    /// Creates a client against a non-default API base URI
    ///
    /// Useful for GitHub Enterprise deployments; also the seam the
    /// integration tests use to point the client at a local stub server.
    pub fn with_base_uri(github_token: String, base_uri: &str) -> Result<Self, String> {
        let client = Octocrab::builder()
            .base_uri(base_uri)
            .map_err(|e| format!("Invalid GitHub API base URI: {}", e))?
            .personal_token(github_token)
            .build()
            .map_err(|e| format!("Failed to create octocrab client: {}", e))?;

        Ok(Self { client })
    }

    /// Fetches every repository of the authenticated user passing `filter`
    ///
    /// Goes through the typed listing handler so the provider's link
    /// headers are honored, and follows them to exhaustion; callers sort
    /// and window the full list client-side. The `public`/`private`
    /// filters are applied here after fetching; the others map to the
    /// affiliation query parameter.
    pub async fn list_user_repositories(
        &self,
        filter: RepositoryFilter,
    ) -> Result<Vec<Repository>, GithubApiError> {
        let current = self.client.current();
        let mut builder = current
            .list_repos_for_authenticated_user()
            .per_page(PROVIDER_PAGE_SIZE);
        if let Some(affiliation) = filter.affiliation() {
            builder = builder.affiliation(affiliation);
        }

        let first_page = builder.send().await?;
        let mut repositories = self.client.all_pages(first_page).await?;

        repositories.retain(|repo| filter.retains(repo.private.unwrap_or(false)));
        Ok(repositories)
    }

    /// Fetches a single repository by owner and name
    ///
    /// Goes through the generic route so the response keeps
    /// `subscribers_count`, which the typed repository model drops.
    pub async fn get_repository(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<RepositoryWithWatchers, GithubApiError> {
        Ok(self
            .client
            .get(format!("/repos/{}/{}", owner, repo), None::<&()>)
            .await?)
    }

    /// Fetches the SPDX identifier of a repository's license
    ///
    /// The route answers 404 for repositories without a license file;
    /// callers treat any failure as "license unknown".
    pub async fn get_repository_license(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Option<String>, GithubApiError> {
        let payload: LicensePayload = self
            .client
            .get(format!("/repos/{}/{}/license", owner, repo), None::<&()>)
            .await?;

        Ok(payload.license.and_then(|license| license.spdx_id))
    }

    /// Searches repositories, collecting every reachable result page
    ///
    /// The search body carries the total match count, which drives the
    /// page walk: pages are requested in order until the reported total
    /// (capped at the provider's 1000-result window) is collected or a
    /// short page ends the walk. `sort` absent means the provider's
    /// relevance ranking; no sort parameter is sent in that case.
    pub async fn search_repositories(
        &self,
        query: &str,
        sort: Option<SearchSortKey>,
        order: SortDirection,
    ) -> Result<RepositorySearchResults, GithubApiError> {
        let mut items = Vec::new();
        let mut approx_total = None;
        let mut page = 1u32;

        loop {
            let request = SearchReposQuery {
                q: query,
                sort: sort.map(|key| key.to_str().to_string()),
                order: order.to_str().to_string(),
                per_page: PROVIDER_PAGE_SIZE,
                page,
            };

            let payload: SearchReposPage = self
                .client
                .get("/search/repositories", Some(&request))
                .await?;

            if approx_total.is_none() {
                approx_total = payload.total_count;
            }
            let reachable = approx_total.unwrap_or(0).min(SEARCH_RESULT_CAP);

            let fetched = payload.items.len();
            items.extend(payload.items);

            if fetched < PROVIDER_PAGE_SIZE as usize || items.len() as u64 >= reachable {
                break;
            }
            page += 1;
        }

        Ok(RepositorySearchResults { approx_total, items })
    }

    /// Fetches the content listing at `path`/`reference`
    ///
    /// Returns the provider's content items: several entries for a
    /// directory, a single content-carrying entry for a file. An empty
    /// path addresses the repository root.
    pub async fn get_contents(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        reference: &str,
    ) -> Result<ContentItems, GithubApiError> {
        Ok(self
            .client
            .repos(owner, repo)
            .get_content()
            .path(path)
            .r#ref(reference)
            .send()
            .await?)
    }
}
