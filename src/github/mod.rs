//! GitHub provider layer
//!
//! This module contains everything that talks to, or reshapes data from,
//! the GitHub REST API:
//! - [`client`]: the octocrab-backed API client and its error type
//! - [`instance`]: the process-wide client instance
//! - [`params`]: closed enumerations for tool parameters
//! - [`models`]: request-scoped projections of provider data
//! - [`content`]: file content decoding and preview rendering
//!
//! Every model produced here is derived, read-only, and scoped to a single
//! tool invocation; nothing is cached across calls.

pub mod client;
pub mod content;
pub mod instance;
pub mod models;
pub mod params;

pub use client::{
    GithubApiError, GithubClient, RepositorySearchResults, RepositoryWithWatchers, ScoredRepository,
};
