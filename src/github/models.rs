//! Request-scoped projections of GitHub repository data
//!
//! These records are produced fresh for each tool invocation, serialized
//! into the response body, and discarded. They carry only the fields the
//! tools report, with provider-side absences kept as `Option` so the JSON
//! output shows explicit nulls.

use octocrab::models::Repository;
use octocrab::models::repos::Content;
use serde::{Deserialize, Serialize};
use url::Url;

/// A repository summary as returned by the list and search tools
///
/// Search hits additionally carry the provider's relevance `score`; the
/// field is omitted from listings, where no score exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositorySummary {
    /// Repository name (without owner)
    pub name: String,

    /// Owner-qualified name
    pub full_name: String,

    /// Repository description
    pub description: Option<String>,

    /// Whether the repository is private
    pub private: bool,

    /// URL for viewing the repository in a browser
    pub html_url: Option<Url>,

    /// Primary programming language
    pub language: Option<String>,

    /// Number of stargazers (stars)
    pub stargazers_count: u64,

    /// Number of forks
    pub forks_count: u64,

    /// Relevance score reported by the search API, when available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    /// When the repository was created (ISO-8601)
    pub created_at: Option<String>,

    /// When the repository was last updated (ISO-8601)
    pub updated_at: Option<String>,
}

impl RepositorySummary {
    /// Projects an API repository object into a summary record
    pub fn from_repository(repo: Repository) -> Self {
        Self {
            full_name: repo.full_name.unwrap_or_default(),
            name: repo.name,
            description: repo.description,
            private: repo.private.unwrap_or(false),
            html_url: repo.html_url,
            language: language_name(repo.language.as_ref()),
            stargazers_count: repo.stargazers_count.unwrap_or(0) as u64,
            forks_count: repo.forks_count.unwrap_or(0) as u64,
            score: None,
            created_at: repo.created_at.map(|dt| dt.to_rfc3339()),
            updated_at: repo.updated_at.map(|dt| dt.to_rfc3339()),
        }
    }

    /// Projects a search hit, attaching its relevance score when reported
    pub fn from_search_hit(repo: Repository, score: Option<f64>) -> Self {
        Self {
            score,
            ..Self::from_repository(repo)
        }
    }
}

/// Full repository detail as returned by the get_repository tool
///
/// Superset of [`RepositorySummary`] with clone URLs, counters, topics and
/// the separately-fetched license identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryDetails {
    /// Repository name (without owner)
    pub name: String,

    /// Owner-qualified name
    pub full_name: String,

    /// Repository description
    pub description: Option<String>,

    /// Whether the repository is private
    pub private: bool,

    /// URL for viewing the repository in a browser
    pub html_url: Option<Url>,

    /// HTTPS clone URL
    pub clone_url: Option<Url>,

    /// SSH clone URL
    pub ssh_url: Option<String>,

    /// Primary programming language
    pub language: Option<String>,

    /// Number of stargazers (stars)
    pub stargazers_count: u64,

    /// Number of users subscribed to (watching) the repository
    pub watchers_count: u64,

    /// Number of forks
    pub forks_count: u64,

    /// Number of open issues
    pub open_issues_count: u64,

    /// Size of the repository in kilobytes
    pub size: u64,

    /// Default branch name
    pub default_branch: String,

    /// Repository topics/tags
    pub topics: Vec<String>,

    /// SPDX identifier of the repository license, absent when none was
    /// found or the license lookup failed
    pub license: Option<String>,

    /// When the repository was created (ISO-8601)
    pub created_at: Option<String>,

    /// When the repository was last updated (ISO-8601)
    pub updated_at: Option<String>,

    /// When the repository was last pushed to (ISO-8601)
    pub pushed_at: Option<String>,
}

impl RepositoryDetails {
    /// Projects an API repository object into a detail record
    ///
    /// `subscribers_count` is the payload's subscriber figure, reported
    /// as the watcher count; the repository object's own `watchers_count`
    /// mirrors the star count and is not used. `license` is the
    /// separately-fetched SPDX identifier.
    pub fn from_repository(
        repo: Repository,
        subscribers_count: Option<u64>,
        license: Option<String>,
    ) -> Self {
        Self {
            full_name: repo.full_name.unwrap_or_default(),
            name: repo.name,
            description: repo.description,
            private: repo.private.unwrap_or(false),
            html_url: repo.html_url,
            clone_url: repo.clone_url,
            ssh_url: repo.ssh_url,
            language: language_name(repo.language.as_ref()),
            stargazers_count: repo.stargazers_count.unwrap_or(0) as u64,
            watchers_count: subscribers_count.unwrap_or(0),
            forks_count: repo.forks_count.unwrap_or(0) as u64,
            open_issues_count: repo.open_issues_count.unwrap_or(0) as u64,
            size: repo.size.unwrap_or(0) as u64,
            default_branch: repo.default_branch.unwrap_or_default(),
            topics: repo.topics.unwrap_or_default(),
            license,
            created_at: repo.created_at.map(|dt| dt.to_rfc3339()),
            updated_at: repo.updated_at.map(|dt| dt.to_rfc3339()),
            pushed_at: repo.pushed_at.map(|dt| dt.to_rfc3339()),
        }
    }
}

/// An entry in a directory listing returned by get_repository_contents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryEntry {
    /// Entry name
    pub name: String,

    /// Path of the entry within the repository
    pub path: String,

    /// Kind of entry (file, dir, symlink, submodule)
    #[serde(rename = "type")]
    pub kind: String,

    /// Size in bytes (0 for directories)
    pub size: u64,

    /// Direct download URL, when the provider offers one
    pub download_url: Option<String>,

    /// URL for viewing the entry in a browser
    pub html_url: Option<String>,
}

impl DirectoryEntry {
    pub fn from_content(entry: &Content) -> Self {
        Self {
            name: entry.name.clone(),
            path: entry.path.clone(),
            kind: entry.r#type.clone(),
            size: entry.size as u64,
            download_url: entry.download_url.clone(),
            html_url: entry.html_url.clone(),
        }
    }
}

/// A single-file record with its text preview
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilePreview {
    /// File name
    pub name: String,

    /// Path of the file within the repository
    pub path: String,

    /// Kind of entry (always "file" here)
    #[serde(rename = "type")]
    pub kind: String,

    /// Size in bytes
    pub size: u64,

    /// Direct download URL, when the provider offers one
    pub download_url: Option<String>,

    /// URL for viewing the file in a browser
    pub html_url: Option<String>,

    /// Decoded text preview, a truncated prefix, or a placeholder for
    /// binary/undecodable content
    pub preview: String,
}

impl FilePreview {
    pub fn from_content(file: &Content, preview: String) -> Self {
        Self {
            name: file.name.clone(),
            path: file.path.clone(),
            kind: file.r#type.clone(),
            size: file.size as u64,
            download_url: file.download_url.clone(),
            html_url: file.html_url.clone(),
            preview,
        }
    }
}

fn language_name(value: Option<&serde_json::Value>) -> Option<String> {
    value.and_then(|v| v.as_str()).map(|s| s.to_string())
}
