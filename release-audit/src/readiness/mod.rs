//! Readiness classification of change requests.
//!
//! A change request starts out ready and is downgraded by each of its tickets
//! that lacks an active sprint or a fix version.

mod status;

pub use status::{DowngradePolicy, ReadinessReport, ReleaseReadiness, SprintReadiness};

use crate::tickets::Ticket;

/// Classifies a change request from its tickets using [`DowngradePolicy::LastWins`].
#[must_use]
pub fn classify(tickets: &[Ticket]) -> ReadinessReport {
    classify_with(tickets, DowngradePolicy::LastWins)
}

/// Classifies a change request from its tickets.
#[must_use]
pub fn classify_with(tickets: &[Ticket], policy: DowngradePolicy) -> ReadinessReport {
    let seed = ReadinessReport {
        sprint: SprintReadiness::HasActiveSprint,
        release: ReleaseReadiness::HasRelease,
        no_tickets_found: tickets.is_empty(),
    };

    tickets.iter().fold(seed, |mut report, ticket| {
        if !ticket.has_sprint() {
            let downgrade = if ticket.has_sprint_history() {
                SprintReadiness::HasClosedSprintOnly
            } else {
                SprintReadiness::NoSprint
            };
            report.sprint = match policy {
                DowngradePolicy::LastWins => downgrade,
                DowngradePolicy::WorstCase => report.sprint.worst(downgrade),
            };
        }
        if !ticket.has_release_version() {
            report.release = ReleaseReadiness::NoRelease;
        }
        report
    })
}
