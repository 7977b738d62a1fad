//! Orchestrates release readiness audits.

mod error;

pub use error::RunnerError;

use crate::config::AuditConfig;
use crate::github::GitHubClient;
use crate::jira::JiraClient;
use crate::readiness::classify_with;
use crate::sources::{ChangeRequest, ChangeRequestSource, ChangeRequestState, TicketSource};
use crate::summary::{ChangeRequestReport, RepositoryOutcome, RepositoryReport, RunSummary};
use crate::tickets::{extract_ticket_ids, lookup_tickets, LookupError};
use tracing::{debug, error, info, info_span, Instrument};

/// Audits every configured repository, one at a time.
pub struct Runner<C, T> {
    config: AuditConfig,
    change_requests: C,
    tickets: T,
}

impl Runner<GitHubClient, JiraClient> {
    /// Builds a runner talking to GitHub and Jira.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if either HTTP client cannot be built.
    pub fn new(config: AuditConfig) -> Result<Self, RunnerError> {
        let github = GitHubClient::new(&config)?;
        let jira = JiraClient::new(config.jira().clone())?;
        Ok(Self::with_sources(config, github, jira))
    }
}

impl<C, T> Runner<C, T>
where
    C: ChangeRequestSource,
    T: TicketSource,
{
    /// Builds a runner over arbitrary sources.
    pub fn with_sources(config: AuditConfig, change_requests: C, tickets: T) -> Self {
        Self {
            config,
            change_requests,
            tickets,
        }
    }

    /// Executes the audit.
    ///
    /// A failing repository is logged and recorded; the run moves on to the
    /// next repository.
    pub async fn run(&self) -> RunSummary {
        let mut summary = RunSummary::new();
        info!(
            count = self.config.repositories().len(),
            policy = self.config.sprint_policy().as_str(),
            "Auditing repositories"
        );

        for repository in self.config.repositories() {
            let outcome = match self.audit_repository(repository).await {
                Ok(report) => RepositoryOutcome::Audited(report),
                Err(e) => {
                    error!(repo = %repository, error = %e, "Failed to audit repository");
                    RepositoryOutcome::Failed {
                        repository: repository.clone(),
                        error: e.to_string(),
                    }
                }
            };
            summary.record_outcome(outcome);
        }

        summary
    }

    /// Audits open, then recently closed, pull requests of one repository.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] on the first listing or ticket lookup failure.
    pub async fn audit_repository(&self, repository: &str) -> Result<RepositoryReport, RunnerError> {
        let span = info_span!("audit_repository", repo = %repository);

        async {
            info!("Auditing repository");

            let open = self
                .change_requests
                .list_open(repository)
                .await
                .map_err(|e| RunnerError::ListChangeRequests {
                    repository: repository.to_string(),
                    state: ChangeRequestState::Open,
                    source: e,
                })?;
            let closed = self
                .change_requests
                .list_closed(repository, self.config.closed_limit())
                .await
                .map_err(|e| RunnerError::ListChangeRequests {
                    repository: repository.to_string(),
                    state: ChangeRequestState::Closed,
                    source: e,
                })?;
            info!(open = open.len(), closed = closed.len(), "Found pull requests");

            let mut change_requests = Vec::with_capacity(open.len() + closed.len());
            for change_request in open.into_iter().chain(closed) {
                change_requests.push(self.audit_change_request(change_request).await?);
            }

            Ok(RepositoryReport {
                repository: repository.to_string(),
                change_requests,
            })
        }
        .instrument(span)
        .await
    }

    /// Looks up the tickets of one pull request and classifies them.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] if any referenced ticket could not be fetched.
    pub async fn audit_change_request(
        &self,
        change_request: ChangeRequest,
    ) -> Result<ChangeRequestReport, LookupError> {
        let ids = extract_ticket_ids(&change_request.title);
        debug!(
            number = change_request.number,
            tickets = ids.len(),
            "Auditing pull request"
        );

        let tickets = lookup_tickets(&self.tickets, &ids).await?;
        let readiness = classify_with(&tickets, self.config.sprint_policy());

        Ok(ChangeRequestReport {
            change_request,
            tickets,
            readiness,
        })
    }
}
