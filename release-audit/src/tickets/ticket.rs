//! Aggregated ticket entity.

use super::id::TicketId;
use crate::sprints::{parse_sprint, select_active_sprint, SprintRecord};
use serde::Serialize;

/// Raw ticket data as returned by the issue tracker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketPayload {
    /// Ticket summary line.
    pub summary: String,

    /// Fix version names, in tracker order.
    pub release_versions: Vec<String>,

    /// Sprint field entries, oldest first.
    pub sprints: Vec<SprintEntry>,
}

/// One entry of a ticket's sprint field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SprintEntry {
    /// Descriptor text, parsed during aggregation.
    Descriptor(String),

    /// A sprint the tracker returned as structured data.
    Record(SprintRecord),
}

impl SprintEntry {
    /// Resolves the entry into a sprint record.
    #[must_use]
    pub fn into_record(self) -> SprintRecord {
        match self {
            Self::Descriptor(descriptor) => parse_sprint(&descriptor),
            Self::Record(record) => record,
        }
    }
}

impl From<&str> for SprintEntry {
    fn from(descriptor: &str) -> Self {
        Self::Descriptor(descriptor.to_string())
    }
}

/// A ticket with parsed sprint memberships, ready for classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ticket {
    /// Ticket key.
    pub number: TicketId,

    /// Ticket summary line.
    pub summary: String,

    /// Fix version names.
    pub release_versions: Vec<String>,

    /// Every sprint the ticket has been part of, oldest first.
    pub sprints: Vec<SprintRecord>,

    /// The active sprint, if any.
    pub current_sprint: Option<SprintRecord>,
}

impl Ticket {
    /// Builds a ticket from its raw payload.
    #[must_use]
    pub fn aggregate(number: TicketId, payload: TicketPayload) -> Self {
        let sprints: Vec<SprintRecord> = payload
            .sprints
            .into_iter()
            .map(SprintEntry::into_record)
            .collect();
        let current_sprint = select_active_sprint(&sprints).cloned();

        Self {
            number,
            summary: payload.summary,
            release_versions: payload.release_versions,
            sprints,
            current_sprint,
        }
    }

    /// Returns true if the ticket is in an active sprint.
    #[must_use]
    pub fn has_sprint(&self) -> bool {
        self.current_sprint.is_some()
    }

    /// Returns true if the ticket has at least one fix version.
    #[must_use]
    pub fn has_release_version(&self) -> bool {
        !self.release_versions.is_empty()
    }

    /// Returns true if the ticket was ever assigned to a sprint.
    #[must_use]
    pub fn has_sprint_history(&self) -> bool {
        !self.sprints.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprints::SprintState;
    use crate::tickets::extract_ticket_ids;

    fn id(key: &str) -> TicketId {
        extract_ticket_ids(key).remove(0)
    }

    fn payload() -> TicketPayload {
        TicketPayload {
            summary: "Export reports as CSV".to_string(),
            release_versions: vec!["2.4.0".to_string()],
            sprints: vec![
                "id=10,name=Sprint 10,state=CLOSED,".into(),
                "id=11,name=Sprint 11,state=ACTIVE,".into(),
            ],
        }
    }

    #[test]
    fn aggregates_payload() {
        let ticket = Ticket::aggregate(id("FOO-100"), payload());

        assert_eq!(ticket.number.as_str(), "FOO-100");
        assert_eq!(ticket.sprints.len(), 2);
        assert_eq!(ticket.sprints[0].state, SprintState::Closed);
        assert_eq!(ticket.current_sprint.as_ref().unwrap().name, "Sprint 11");
        assert!(ticket.has_sprint());
        assert!(ticket.has_release_version());
        assert!(ticket.has_sprint_history());
    }

    #[test]
    fn aggregation_is_repeatable() {
        let first = Ticket::aggregate(id("FOO-100"), payload());
        let second = Ticket::aggregate(id("FOO-100"), payload());

        assert_eq!(first, second);
    }

    #[test]
    fn empty_payload_has_nothing() {
        let ticket = Ticket::aggregate(id("FOO-1"), TicketPayload::default());

        assert!(ticket.current_sprint.is_none());
        assert!(!ticket.has_sprint());
        assert!(!ticket.has_release_version());
        assert!(!ticket.has_sprint_history());
    }

    #[test]
    fn closed_sprints_only_is_history_without_current() {
        let ticket = Ticket::aggregate(
            id("FOO-2"),
            TicketPayload {
                sprints: vec!["id=1,name=Old,state=CLOSED,".into()],
                ..TicketPayload::default()
            },
        );

        assert!(!ticket.has_sprint());
        assert!(ticket.has_sprint_history());
    }

    #[test]
    fn structured_entries_are_taken_as_is() {
        let record = SprintRecord {
            id: 5,
            name: "Q3, week 2".to_string(),
            state: SprintState::Active,
        };
        let ticket = Ticket::aggregate(
            id("FOO-3"),
            TicketPayload {
                sprints: vec![
                    "id=4,name=Q3 week 1,state=CLOSED,".into(),
                    SprintEntry::Record(record.clone()),
                ],
                ..TicketPayload::default()
            },
        );

        assert_eq!(ticket.sprints[0].name, "Q3 week 1");
        assert_eq!(ticket.current_sprint, Some(record));
    }
}
