//! Ticket lookup error types.

use super::id::TicketId;
use crate::sources::TransportError;
use thiserror::Error;

/// A ticket could not be fetched from the issue tracker.
#[derive(Debug, Error)]
#[error("Failed to look up ticket {ticket}: {source}")]
pub struct LookupError {
    /// The ticket whose fetch failed.
    pub ticket: TicketId,

    /// Underlying transport failure.
    #[source]
    pub source: TransportError,
}
