//! GitHub pull request listing.

use crate::config::{AuditConfig, MAX_PAGE_SIZE};
use crate::sources::{ChangeRequest, ChangeRequestSource, ChangeRequestState, TransportError};
use async_trait::async_trait;
use octocrab::models::pulls::PullRequest;
use octocrab::params::{pulls::Sort, Direction, State};
use octocrab::Octocrab;
use tracing::debug;

/// Lists pull requests of an organization's repositories.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    octocrab: Octocrab,
    organization: String,
}

impl GitHubClient {
    /// Builds an authenticated client for the configured organization.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &AuditConfig) -> Result<Self, octocrab::Error> {
        let octocrab = Octocrab::builder()
            .personal_token(config.github_token().to_string())
            .build()?;
        Ok(Self::from_octocrab(octocrab, config.organization()))
    }

    /// Wraps an existing octocrab instance.
    pub fn from_octocrab(octocrab: Octocrab, organization: &str) -> Self {
        Self {
            octocrab,
            organization: organization.to_string(),
        }
    }
}

#[async_trait]
impl ChangeRequestSource for GitHubClient {
    async fn list_open(&self, repository: &str) -> Result<Vec<ChangeRequest>, TransportError> {
        debug!(repo = %repository, "Listing open pull requests");
        let page = self
            .octocrab
            .pulls(&self.organization, repository)
            .list()
            .state(State::Open)
            .per_page(MAX_PAGE_SIZE)
            .send()
            .await?;

        Ok(to_change_requests(page.items, ChangeRequestState::Open))
    }

    async fn list_closed(
        &self,
        repository: &str,
        limit: u8,
    ) -> Result<Vec<ChangeRequest>, TransportError> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        debug!(repo = %repository, limit, "Listing closed pull requests");
        let page = self
            .octocrab
            .pulls(&self.organization, repository)
            .list()
            .state(State::Closed)
            .sort(Sort::Updated)
            .direction(Direction::Descending)
            .per_page(limit.min(MAX_PAGE_SIZE))
            .send()
            .await?;

        let mut requests = to_change_requests(page.items, ChangeRequestState::Closed);
        requests.truncate(usize::from(limit));
        Ok(requests)
    }
}

/// Converts API pull requests, treating a missing title as empty.
fn to_change_requests(pulls: Vec<PullRequest>, state: ChangeRequestState) -> Vec<ChangeRequest> {
    pulls
        .into_iter()
        .map(|pull| ChangeRequest {
            number: pull.number,
            title: pull.title.unwrap_or_default(),
            state,
        })
        .collect()
}
