//! Runner error types.

use crate::sources::{ChangeRequestState, TransportError};
use crate::tickets::LookupError;

/// Errors that can occur while running an audit.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration loading errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),

    /// Jira HTTP client initialization errors.
    #[error("Failed to build Jira client: {0}")]
    Http(#[from] reqwest::Error),

    /// Listing pull requests of a repository failed.
    #[error("Couldn't get {} pull requests of {repository}: {source}", .state.as_str())]
    ListChangeRequests {
        repository: String,
        state: ChangeRequestState,
        #[source]
        source: TransportError,
    },

    /// A ticket referenced by a pull request could not be fetched.
    #[error(transparent)]
    Lookup(#[from] LookupError),
}
