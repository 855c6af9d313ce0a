//! Response rendering for the repository tools
//!
//! Every tool returns the same text shape: a short human-readable header
//! line, a blank line, then the pretty-printed JSON body with 2-space
//! indentation. That combined string is the return contract, not a
//! structured object; [`render`] is the single place it is assembled.

use serde::{Deserialize, Serialize};

use crate::github::models::RepositorySummary;

/// Renders the `header + blank line + pretty JSON` response text
pub fn render<T: Serialize>(header: &str, body: &T) -> Result<String, String> {
    let json = serde_json::to_string_pretty(body)
        .map_err(|err| format!("Failed to serialize response body: {}", err))?;
    Ok(format!("{}\n\n{}", header, json))
}

/// Body of a search_repositories response
///
/// `approx_total` is the provider's approximate total match count and may
/// be absent; `items` is the client-side window of summaries, each
/// carrying its relevance score when the provider reported one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositorySearchBody {
    /// Approximate total number of matches reported by the provider
    pub approx_total: Option<u64>,

    /// Windowed repository summaries
    pub items: Vec<RepositorySummary>,
}
