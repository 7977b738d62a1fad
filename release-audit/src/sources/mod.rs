//! Data sources consumed by the audit.
//!
//! The runner only talks to GitHub and Jira through these traits, which keeps
//! the correlation logic testable with in-memory sources.

mod change_request;
mod error;

pub use change_request::{ChangeRequest, ChangeRequestState};
pub use error::TransportError;

use crate::tickets::{TicketId, TicketPayload};
use async_trait::async_trait;

/// Lists change requests for a repository.
#[async_trait]
pub trait ChangeRequestSource: Send + Sync {
    /// Lists open change requests, up to one page.
    async fn list_open(&self, repository: &str) -> Result<Vec<ChangeRequest>, TransportError>;

    /// Lists the most recent closed change requests, at most `limit`.
    async fn list_closed(
        &self,
        repository: &str,
        limit: u8,
    ) -> Result<Vec<ChangeRequest>, TransportError>;
}

/// Fetches raw ticket data by key.
#[async_trait]
pub trait TicketSource: Send + Sync {
    /// Fetches the summary, fix versions and raw sprint descriptors of a ticket.
    async fn get(&self, id: &TicketId) -> Result<TicketPayload, TransportError>;
}
