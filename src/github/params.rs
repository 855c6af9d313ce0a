//! Closed parameter enumerations for the repository tools
//!
//! The string options accepted on the wire map to closed enum types so
//! that unrecognized values are rejected when the tool arguments are
//! decoded, rather than falling through to the provider. The serde names
//! are the stable wire contract; `to_str` yields the value sent to the
//! GitHub API where the two differ.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Ownership/visibility filter for listing the authenticated user's repositories
///
/// `owner` and `member` translate to the API's affiliation parameter;
/// `public` and `private` are applied client-side after fetching, since the
/// affiliation parameter cannot express them.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    schemars::JsonSchema,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RepositoryFilter {
    /// Every repository the user can see
    All,
    /// Repositories the user owns
    Owner,
    /// Public repositories only
    Public,
    /// Private repositories only
    Private,
    /// Repositories the user collaborates on or accesses through an organization
    Member,
}

impl Default for RepositoryFilter {
    /// Returns the default filter (All)
    fn default() -> Self {
        RepositoryFilter::All
    }
}

impl RepositoryFilter {
    /// The affiliation query value for this filter, when one applies
    pub fn affiliation(self) -> Option<&'static str> {
        match self {
            RepositoryFilter::Owner => Some("owner"),
            RepositoryFilter::Member => Some("collaborator,organization_member"),
            _ => None,
        }
    }

    /// Whether a repository with the given `private` flag passes this filter
    pub fn retains(self, private: bool) -> bool {
        match self {
            RepositoryFilter::Public => !private,
            RepositoryFilter::Private => private,
            _ => true,
        }
    }
}

/// Sort key for the repository listing
///
/// Sorting happens client-side over the full fetched list. Timestamp keys
/// place repositories lacking the field last regardless of direction;
/// `full_name` compares case-insensitively.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    schemars::JsonSchema,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RepositorySortKey {
    /// Sort by creation time
    Created,
    /// Sort by last update time
    Updated,
    /// Sort by last push time
    Pushed,
    /// Sort by owner-qualified name, case-insensitively
    FullName,
}

impl Default for RepositorySortKey {
    /// Returns the default sort key (Updated)
    fn default() -> Self {
        RepositorySortKey::Updated
    }
}

/// Sort direction options for repository listings and searches
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    schemars::JsonSchema,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum SortDirection {
    /// Sort in ascending order (lowest to highest, oldest to newest)
    #[serde(rename = "asc")]
    #[strum(serialize = "asc")]
    Ascending,
    /// Sort in descending order (highest to lowest, newest to oldest)
    #[serde(rename = "desc")]
    #[strum(serialize = "desc")]
    Descending,
}

impl Default for SortDirection {
    /// Returns the default order option (Descending)
    fn default() -> Self {
        SortDirection::Descending
    }
}

impl SortDirection {
    /// Converts the direction to its API string representation
    pub fn to_str(&self) -> &str {
        self.as_ref()
    }

    pub fn is_ascending(self) -> bool {
        matches!(self, SortDirection::Ascending)
    }
}

/// Sort key for repository search results
///
/// When no key is given the provider ranks results by relevance to the
/// query; that absence is represented by `Option<SearchSortKey>` rather
/// than a variant here, so the API never receives an empty sort value.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    schemars::JsonSchema,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SearchSortKey {
    /// Sort by number of stars
    Stars,
    /// Sort by number of forks
    Forks,
    /// Sort by number of issues labeled help-wanted
    HelpWantedIssues,
    /// Sort by most recently updated
    Updated,
}

impl SearchSortKey {
    /// Converts the sort key to its API string representation
    pub fn to_str(&self) -> &str {
        self.as_ref()
    }
}
