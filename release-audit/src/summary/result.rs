//! Per-repository audit results.

use crate::readiness::ReadinessReport;
use crate::sources::ChangeRequest;
use crate::tickets::Ticket;
use serde::Serialize;

/// Audit result for a single pull request.
#[derive(Debug, Clone, Serialize)]
pub struct ChangeRequestReport {
    /// The audited pull request.
    pub change_request: ChangeRequest,

    /// Tickets referenced by the title, in order of appearance.
    pub tickets: Vec<Ticket>,

    /// Classification of the tickets.
    pub readiness: ReadinessReport,
}

/// Audit result for every pull request of one repository.
#[derive(Debug, Clone, Serialize)]
pub struct RepositoryReport {
    /// Repository name.
    pub repository: String,

    /// Open pull requests first, then closed ones.
    pub change_requests: Vec<ChangeRequestReport>,
}

/// Outcome of auditing one repository.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RepositoryOutcome {
    /// Every pull request was audited.
    Audited(RepositoryReport),

    /// Listing or a ticket lookup failed; the repository was abandoned.
    Failed {
        /// Repository name.
        repository: String,
        /// Error message.
        error: String,
    },
}

impl RepositoryOutcome {
    /// Returns the repository name.
    #[must_use]
    pub fn repository(&self) -> &str {
        match self {
            Self::Audited(report) => &report.repository,
            Self::Failed { repository, .. } => repository,
        }
    }
}
