//! Repolens MCP server for GitHub repository queries
//!
//! This library provides Model Context Protocol (MCP) tools for querying
//! GitHub repositories through the GitHub REST API:
//! - List repositories for the authenticated user
//! - Get detailed repository information
//! - Search repositories on GitHub
//! - Get repository contents and file previews
//!
//! ## Authentication
//!
//! All operations authenticate with a personal access token read from the
//! `GITHUB_TOKEN` environment variable (or the `--github-token` command
//! line flag). The token is required: the server exits at startup when no
//! credential is available.
//!
//! ```bash
//! export GITHUB_TOKEN=your_github_token
//! ```
//!
//! ## Usage
//!
//! This library can be used in several ways:
//! - As an MCP server (STDIN/STDOUT mode)
//! - As an MCP server (HTTP/SSE mode, selected by `REPOLENS_ENV=production`)
//! - Directly as a Rust library
//!
//! ## Process-Wide GithubClient
//!
//! The library uses a single `GithubClient` instance which is initialized at
//! process startup and shared by every tool invocation. Each invocation is
//! stateless; the client is the only long-lived object in the process.
//!
//! ```rust,no_run
//! // Initialize the global GitHub client (only happens once)
//! let client = repolens::github::instance::init_github_client("github_token".to_string());
//!
//! // Later access to the same instance
//! let client = repolens::github::instance::github_client();
//! ```

pub mod github;
pub mod services;
pub mod tools;
pub mod transport;
