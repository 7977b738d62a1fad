//! Ticket keys, lookups and aggregation.

mod error;
mod id;
mod ticket;

pub use error::LookupError;
pub use id::{extract_ticket_ids, TicketId};
pub use ticket::{SprintEntry, Ticket, TicketPayload};

use crate::sources::TicketSource;
use tracing::debug;

/// Looks up and aggregates every ticket in `ids`, in order.
///
/// The batch is all-or-nothing: the first failed fetch stops the remaining
/// lookups and is returned.
///
/// # Errors
///
/// Returns [`LookupError`] for the first ticket that could not be fetched.
pub async fn lookup_tickets<S>(source: &S, ids: &[TicketId]) -> Result<Vec<Ticket>, LookupError>
where
    S: TicketSource + ?Sized,
{
    let mut tickets = Vec::with_capacity(ids.len());

    for id in ids {
        debug!(ticket = %id, "Looking up ticket");
        let payload = source.get(id).await.map_err(|e| LookupError {
            ticket: id.clone(),
            source: e,
        })?;
        tickets.push(Ticket::aggregate(id.clone(), payload));
    }

    Ok(tickets)
}
