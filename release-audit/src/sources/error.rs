//! Transport error types.

use thiserror::Error;

/// Errors raised while fetching data from GitHub or Jira.
#[derive(Debug, Error)]
pub enum TransportError {
    /// GitHub API error.
    #[error("GitHub API error: {0}")]
    GitHub(#[from] octocrab::Error),

    /// Jira request could not be completed.
    #[error("Jira request failed: {0}")]
    Jira(#[from] reqwest::Error),

    /// Jira answered with a non-success status.
    #[error("Jira responded with {status}: {body}")]
    JiraStatus { status: u16, body: String },
}
