//! Per-tool orchestration over the GitHub client
//!
//! Each function here implements one tool end to end: validate the
//! decoded parameters, call the client, reshape the response, and render
//! the final `header + JSON` string. The client is passed in explicitly
//! rather than read from global state, which keeps every function
//! directly testable against a stub API server.
//!
//! Sorting and windowing are plain functions over already-fetched data;
//! the provider is never asked to paginate on the tools' behalf.

use chrono::{DateTime, Utc};
use octocrab::models::Repository;
use std::cmp::Ordering;

use crate::github::client::{GithubApiError, GithubClient};
use crate::github::content;
use crate::github::models::{DirectoryEntry, FilePreview, RepositoryDetails, RepositorySummary};
use crate::github::params::{RepositoryFilter, RepositorySortKey, SearchSortKey, SortDirection};
use crate::tools::responses::{RepositorySearchBody, render};

/// Lists the authenticated user's repositories
///
/// Fetches the full filtered list, sorts it client-side by `sort` in
/// `direction`, and returns the window selected by `per_page`/`page` as a
/// count-prefixed summary listing.
pub async fn list_repositories(
    client: &GithubClient,
    filter: RepositoryFilter,
    sort: RepositorySortKey,
    direction: SortDirection,
    per_page: u32,
    page: u32,
) -> Result<String, String> {
    ensure_positive_window(per_page, page)?;

    let mut repositories = client
        .list_user_repositories(filter)
        .await
        .map_err(|err| format!("Failed to list repositories: {}", err))?;

    sort_repositories(&mut repositories, sort, direction);

    let summaries: Vec<RepositorySummary> = paginate(repositories, per_page, page)
        .into_iter()
        .map(RepositorySummary::from_repository)
        .collect();

    tracing::debug!(
        count = summaries.len(),
        "returning repository listing window"
    );
    render(
        &format!("Found {} repositories:", summaries.len()),
        &summaries,
    )
}

/// Gets detailed information about a single repository
///
/// The license is fetched separately and any failure of that sub-fetch is
/// treated as "license unknown" rather than failing the call; a failure of
/// the repository lookup itself propagates.
pub async fn get_repository(
    client: &GithubClient,
    owner: &str,
    repo: &str,
) -> Result<String, String> {
    ensure_owner_and_repo(owner, repo)?;

    let repository = client
        .get_repository(owner, repo)
        .await
        .map_err(|err| format!("Failed to get repository {}/{}: {}", owner, repo, err))?;

    // Repositories without a license file answer 404 here; swallow it.
    let license = client
        .get_repository_license(owner, repo)
        .await
        .ok()
        .flatten();

    let details = RepositoryDetails::from_repository(
        repository.repository,
        repository.subscribers_count,
        license,
    );
    render("Repository Details:", &details)
}

/// Searches repositories on the provider
///
/// The provider ranks and returns matches; the `per_page`/`page` window is
/// applied client-side over the collected results, as in the listing tool.
pub async fn search_repositories(
    client: &GithubClient,
    query: &str,
    sort: Option<SearchSortKey>,
    order: SortDirection,
    per_page: u32,
    page: u32,
) -> Result<String, String> {
    ensure_positive_window(per_page, page)?;
    if query.trim().is_empty() {
        return Err("Search query must be non-empty".to_string());
    }

    let results = client
        .search_repositories(query, sort, order)
        .await
        .map_err(|err| format!("Failed to search repositories: {}", err))?;

    let items: Vec<RepositorySummary> = paginate(results.items, per_page, page)
        .into_iter()
        .map(|hit| RepositorySummary::from_search_hit(hit.repository, hit.score))
        .collect();

    let body = RepositorySearchBody {
        approx_total: results.approx_total,
        items,
    };
    render("Search Results:", &body)
}

/// Gets the contents of a repository directory or a single file
///
/// Failure handling is deliberately layered: a provider rejection (for
/// example an unknown repository, path or ref) propagates as an error; an
/// exchange that never produced a structured provider response, and a
/// base64 decode failure on a file body, are both reported in-band as
/// diagnostic strings so content edge cases stay soft-failing.
pub async fn get_repository_contents(
    client: &GithubClient,
    owner: &str,
    repo: &str,
    path: &str,
    reference: &str,
) -> Result<String, String> {
    ensure_owner_and_repo(owner, repo)?;

    let locator = content_locator(owner, repo, path);

    let contents = match client.get_contents(owner, repo, path, reference).await {
        Ok(contents) => contents,
        Err(GithubApiError::Rejected { message }) => {
            return Err(format!("Failed to get contents for {}: {}", locator, message));
        }
        Err(GithubApiError::Exchange { detail }) => {
            tracing::warn!(%locator, "contents exchange failed: {}", detail);
            return Ok(format!(
                "Unable to fetch contents for {}: {} (path: {:?}, ref: {:?})",
                locator, detail, path, reference
            ));
        }
    };

    let items = contents.items;

    // A file response is a single entry carrying inline content; a
    // directory listing never does, even when it has one entry.
    if items.len() == 1 && items[0].content.is_some() {
        let file = &items[0];

        let text = match (file.encoding.as_deref(), file.content.as_deref()) {
            (Some("base64"), Some(encoded)) => match content::decode_content(encoded) {
                Ok(text) => Some(text),
                Err(err) => {
                    return Ok(format!(
                        "Unexpected error decoding file for {}: {}",
                        locator, err
                    ));
                }
            },
            _ => None,
        };

        let record = FilePreview::from_content(file, content::render_preview(text));
        return render("File Details:", &record);
    }

    let entries: Vec<DirectoryEntry> = items.iter().map(DirectoryEntry::from_content).collect();
    let label = if path.is_empty() { "root" } else { path };
    render(&format!("Directory Contents ({}):", label), &entries)
}

/// Sorts repositories in place by the given key and direction
///
/// Timestamp keys place repositories lacking the field last regardless of
/// direction. The underlying sort is stable, so equal keys keep their
/// fetch order.
pub fn sort_repositories(
    repositories: &mut [Repository],
    key: RepositorySortKey,
    direction: SortDirection,
) {
    match key {
        RepositorySortKey::Created => {
            sort_by_timestamp(repositories, |repo| repo.created_at, direction)
        }
        RepositorySortKey::Updated => {
            sort_by_timestamp(repositories, |repo| repo.updated_at, direction)
        }
        RepositorySortKey::Pushed => {
            sort_by_timestamp(repositories, |repo| repo.pushed_at, direction)
        }
        RepositorySortKey::FullName => repositories.sort_by(|a, b| {
            let left = sortable_full_name(a);
            let right = sortable_full_name(b);
            if direction.is_ascending() {
                left.cmp(&right)
            } else {
                right.cmp(&left)
            }
        }),
    }
}

/// Takes the contiguous window `[(page-1)*per_page, page*per_page)`
pub fn paginate<T>(items: Vec<T>, per_page: u32, page: u32) -> Vec<T> {
    let start = (page.saturating_sub(1) as usize).saturating_mul(per_page as usize);
    items
        .into_iter()
        .skip(start)
        .take(per_page as usize)
        .collect()
}

fn sort_by_timestamp<F>(repositories: &mut [Repository], timestamp: F, direction: SortDirection)
where
    F: Fn(&Repository) -> Option<DateTime<Utc>>,
{
    repositories.sort_by(|a, b| match (timestamp(a), timestamp(b)) {
        (Some(left), Some(right)) => {
            if direction.is_ascending() {
                left.cmp(&right)
            } else {
                right.cmp(&left)
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

fn sortable_full_name(repo: &Repository) -> String {
    repo.full_name
        .clone()
        .unwrap_or_else(|| repo.name.clone())
        .to_lowercase()
}

fn ensure_positive_window(per_page: u32, page: u32) -> Result<(), String> {
    if per_page == 0 || page == 0 {
        return Err("per_page and page must be positive integers".to_string());
    }
    Ok(())
}

fn ensure_owner_and_repo(owner: &str, repo: &str) -> Result<(), String> {
    if owner.trim().is_empty() || repo.trim().is_empty() {
        return Err("owner and repo must be non-empty".to_string());
    }
    Ok(())
}

fn content_locator(owner: &str, repo: &str, path: &str) -> String {
    if path.is_empty() {
        format!("{}/{}", owner, repo)
    } else {
        format!("{}/{}/{}", owner, repo, path)
    }
}
