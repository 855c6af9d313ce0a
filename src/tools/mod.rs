//! MCP tool surface for the repository queries
//!
//! [`RepositoryTools`] is a thin wrapper around the shared
//! [`GithubClient`], exposing the four repository operations through the
//! MCP tool protocol. The tool methods decode and default the wire
//! parameters, then delegate to the service functions; no state flows
//! between invocations.

pub mod responses;

use rmcp::{ServerHandler, model::*, schemars, tool};

use crate::github::GithubClient;
use crate::github::instance;
use crate::github::params::{RepositoryFilter, RepositorySortKey, SearchSortKey, SortDirection};
use crate::services;

/// Wrapper for the GitHub repository tools exposed through the MCP protocol
#[derive(Clone)]
pub struct RepositoryTools {
    /// The shared GitHub client
    client: GithubClient,
}

impl RepositoryTools {
    /// Creates a new RepositoryTools instance with the given token
    ///
    /// Initializes (or reuses) the global client instance so every tool
    /// invocation in the process authenticates with the same credential.
    pub fn new(github_token: String) -> Self {
        let client = instance::init_github_client(github_token);
        Self {
            client: client.clone(),
        }
    }

    /// Creates a RepositoryTools instance from the already-initialized
    /// global client
    ///
    /// Used by the HTTP/SSE transport, which constructs one service per
    /// connection after startup has initialized the client.
    pub fn from_global() -> Self {
        Self {
            client: instance::github_client().clone(),
        }
    }
}

#[tool(tool_box)]
impl ServerHandler for RepositoryTools {
    /// Provides information about this MCP server
    ///
    /// Returns server capabilities, protocol version, and usage instructions
    fn get_info(&self) -> ServerInfo {
        let instructions = "# GitHub Repository MCP Server

A GitHub MCP server that provides tools to interact with GitHub repositories.
This server allows you to:
- List repositories for the authenticated user (`list_repositories`)
- Get detailed repository information (`get_repository`)
- Search repositories on GitHub (`search_repositories`)
- Get repository contents and file information (`get_repository_contents`)

Authentication is handled via the GITHUB_TOKEN environment variable (or the
--github-token command line flag); the token is read once at startup and
used for every request.
"
        .to_string();

        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(instructions),
        }
    }
}

#[tool(tool_box)]
impl RepositoryTools {
    /// List repositories for the authenticated user
    ///
    /// Fetches the user's repositories from the GitHub API, sorts them
    /// client-side and returns one page of summaries.
    #[tool(
        description = "List GitHub repositories for the authenticated user. Supports ownership/visibility filtering, sorting and pagination. Example usage: `{\"name\": \"list_repositories\", \"arguments\": {}}`. With filtering and sorting: `{\"name\": \"list_repositories\", \"arguments\": {\"type\": \"public\", \"sort\": \"full_name\", \"direction\": \"asc\"}}`. With pagination: `{\"name\": \"list_repositories\", \"arguments\": {\"per_page\": 10, \"page\": 2}}`"
    )]
    async fn list_repositories(
        &self,
        #[tool(param)]
        #[schemars(
            description = "Ownership/visibility filter (optional, default is 'all'). Options: all, owner (repositories the user owns), public, private, member (repositories accessed through collaboration or an organization)."
        )]
        r#type: Option<RepositoryFilter>,

        #[tool(param)]
        #[schemars(
            description = "Sort key (optional, default is 'updated'). Options: created, updated, pushed, full_name. The full_name sort is case-insensitive; repositories missing a timestamp sort last."
        )]
        sort: Option<RepositorySortKey>,

        #[tool(param)]
        #[schemars(
            description = "Sort direction (optional, default is 'desc'). Options: asc, desc."
        )]
        direction: Option<SortDirection>,

        #[tool(param)]
        #[schemars(
            description = "Results per page (optional, default is 30). Must be a positive integer; the window is applied client-side over the full list."
        )]
        per_page: Option<u32>,

        #[tool(param)]
        #[schemars(description = "Result page number (optional, default is 1, 1-based).")]
        page: Option<u32>,
    ) -> Result<String, String> {
        services::list_repositories(
            &self.client,
            r#type.unwrap_or_default(),
            sort.unwrap_or_default(),
            direction.unwrap_or_default(),
            per_page.unwrap_or(30),
            page.unwrap_or(1),
        )
        .await
    }

    /// Get detailed information about a specific repository
    #[tool(
        description = "Get detailed information about a specific GitHub repository, including clone URLs, counters, topics and license. Example usage: `{\"name\": \"get_repository\", \"arguments\": {\"owner\": \"rust-lang\", \"repo\": \"rust\"}}`"
    )]
    async fn get_repository(
        &self,
        #[tool(param)]
        #[schemars(description = "Repository owner (user or organization login, required).")]
        owner: String,

        #[tool(param)]
        #[schemars(description = "Repository name (required).")]
        repo: String,
    ) -> Result<String, String> {
        services::get_repository(&self.client, &owner, &repo).await
    }

    /// Search for repositories on GitHub
    #[tool(
        description = "Search for repositories on GitHub. Supports GitHub's search qualifiers like 'language:rust' or 'stars:>1000', sorting by stars/forks/help-wanted-issues/updated, and pagination. When no sort is given, results use GitHub's relevance ranking. Example usage: `{\"name\": \"search_repositories\", \"arguments\": {\"q\": \"rust http client\"}}`. With sorting: `{\"name\": \"search_repositories\", \"arguments\": {\"q\": \"game engine\", \"sort\": \"stars\", \"order\": \"desc\"}}`"
    )]
    async fn search_repositories(
        &self,
        #[tool(param)]
        #[schemars(
            description = "Search query (required). Supports GitHub's search syntax, e.g. 'language:rust stars:>1000'."
        )]
        q: String,

        #[tool(param)]
        #[schemars(
            description = "Sort key (optional). Options: stars, forks, help-wanted-issues, updated. When unspecified, results are sorted by best match to the query."
        )]
        sort: Option<SearchSortKey>,

        #[tool(param)]
        #[schemars(
            description = "Sort order (optional, default is 'desc'). Options: asc, desc."
        )]
        order: Option<SortDirection>,

        #[tool(param)]
        #[schemars(description = "Results per page (optional, default is 30).")]
        per_page: Option<u32>,

        #[tool(param)]
        #[schemars(description = "Result page number (optional, default is 1, 1-based).")]
        page: Option<u32>,
    ) -> Result<String, String> {
        services::search_repositories(
            &self.client,
            &q,
            sort,
            order.unwrap_or_default(),
            per_page.unwrap_or(30),
            page.unwrap_or(1),
        )
        .await
    }

    /// Get the contents of a repository directory or a single file
    #[tool(
        description = "Get the contents of a GitHub repository directory or a single file. Directories return entry listings; files return metadata plus a decoded text preview (capped at 4000 characters, with placeholders for binary or undecodable content). Example usage: `{\"name\": \"get_repository_contents\", \"arguments\": {\"owner\": \"rust-lang\", \"repo\": \"rust\", \"path\": \"src\"}}`. Root listing: `{\"name\": \"get_repository_contents\", \"arguments\": {\"owner\": \"rust-lang\", \"repo\": \"rust\"}}`. With a ref: `{\"name\": \"get_repository_contents\", \"arguments\": {\"owner\": \"tokio-rs\", \"repo\": \"tokio\", \"path\": \"README.md\", \"ref\": \"master\"}}`"
    )]
    async fn get_repository_contents(
        &self,
        #[tool(param)]
        #[schemars(description = "Repository owner (user or organization login, required).")]
        owner: String,

        #[tool(param)]
        #[schemars(description = "Repository name (required).")]
        repo: String,

        #[tool(param)]
        #[schemars(
            description = "Path within the repository (optional). An empty or omitted path addresses the repository root."
        )]
        path: Option<String>,

        #[tool(param)]
        #[schemars(
            description = "Branch, tag or commit (optional, default is 'main'). This is a fixed default, not auto-detected: it fails when the repository has no branch of that name."
        )]
        r#ref: Option<String>,
    ) -> Result<String, String> {
        services::get_repository_contents(
            &self.client,
            &owner,
            &repo,
            path.as_deref().unwrap_or(""),
            r#ref.as_deref().unwrap_or("main"),
        )
        .await
    }
}
