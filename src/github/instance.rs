//! Global GithubClient instance
//!
//! This module provides a process-wide instance of [`GithubClient`] using
//! once_cell. The client is constructed once at startup with the resolved
//! credential and every tool invocation clones the same instance, which
//! preserves single-authentication semantics without hidden mutable state.

use once_cell::sync::OnceCell;

use super::client::GithubClient;

/// Global GithubClient instance
static GLOBAL_GITHUB_CLIENT: OnceCell<GithubClient> = OnceCell::new();

/// Initialize the global GithubClient instance with the given token
///
/// This function should be called once during process startup. If called
/// multiple times, only the first call has an effect and subsequent calls
/// return the existing instance.
pub fn init_github_client(github_token: String) -> &'static GithubClient {
    GLOBAL_GITHUB_CLIENT.get_or_init(move || {
        GithubClient::new(github_token).expect("Failed to initialize global GitHub client")
    })
}

/// Get the global GithubClient instance
///
/// Panics when called before [`init_github_client`]; startup always
/// initializes the client before any transport begins serving.
pub fn github_client() -> &'static GithubClient {
    GLOBAL_GITHUB_CLIENT
        .get()
        .expect("GitHub client accessed before initialization")
}
