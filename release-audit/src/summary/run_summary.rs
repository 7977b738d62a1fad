//! Run summary types.

use super::result::RepositoryOutcome;

/// Summary of a complete run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Per-repository outcomes, in configuration order.
    pub outcomes: Vec<RepositoryOutcome>,

    /// Number of repositories fully audited.
    pub repositories_audited: usize,

    /// Number of repositories abandoned because of an error.
    pub repositories_failed: usize,

    /// Number of pull requests audited.
    pub change_requests_checked: usize,

    /// Number of pull requests whose tickets all have an active sprint and a release.
    pub change_requests_ready: usize,

    /// Number of pull requests that reference no ticket.
    pub change_requests_without_tickets: usize,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the summary with a repository outcome.
    pub fn record_outcome(&mut self, outcome: RepositoryOutcome) {
        match &outcome {
            RepositoryOutcome::Audited(report) => {
                self.repositories_audited += 1;
                for change_request in &report.change_requests {
                    self.change_requests_checked += 1;
                    if change_request.readiness.no_tickets_found {
                        self.change_requests_without_tickets += 1;
                    } else if change_request.readiness.is_ready() {
                        self.change_requests_ready += 1;
                    }
                }
            }
            RepositoryOutcome::Failed { .. } => self.repositories_failed += 1,
        }
        self.outcomes.push(outcome);
    }

    /// Returns true if any repository failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.repositories_failed > 0
    }

    /// Returns true if every repository was audited.
    #[must_use]
    pub fn all_success(&self) -> bool {
        self.repositories_failed == 0
    }
}
