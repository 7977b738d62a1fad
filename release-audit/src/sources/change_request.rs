//! Change request (pull request) view.

use serde::Serialize;

/// Whether a change request is still open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeRequestState {
    /// Awaiting review or merge.
    Open,

    /// Merged or closed.
    Closed,
}

impl ChangeRequestState {
    /// Returns the state as a lowercase string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

/// A pull request as seen by the audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeRequest {
    /// Pull request number.
    pub number: u64,

    /// Pull request title; ticket keys are extracted from here.
    pub title: String,

    /// Open or closed.
    pub state: ChangeRequestState,
}
