//! Text rendering of audit results.

use crate::readiness::{ReadinessReport, ReleaseReadiness, SprintReadiness};
use crate::summary::{ChangeRequestReport, RepositoryOutcome};
use crate::tickets::Ticket;
use crossterm::style::{style, Color, Stylize};
use std::fmt::Write;

const READY: &str = "✔";
const PARTIAL: &str = "~";
const NOT_READY: &str = "✘";
const NO_TICKETS: &str = "?";

/// Renders repository outcomes as indented, optionally coloured text.
#[derive(Debug, Clone, Copy)]
pub struct ReportRenderer {
    color: bool,
}

impl ReportRenderer {
    /// Creates a renderer; `color` enables ANSI styling.
    #[must_use]
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Renders every outcome in order.
    #[must_use]
    pub fn render(&self, outcomes: &[RepositoryOutcome]) -> String {
        outcomes
            .iter()
            .map(|outcome| self.render_outcome(outcome))
            .collect()
    }

    /// Renders one repository: a header followed by its pull requests.
    #[must_use]
    pub fn render_outcome(&self, outcome: &RepositoryOutcome) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.paint(outcome.repository(), Color::Cyan));

        match outcome {
            RepositoryOutcome::Audited(report) => {
                if report.change_requests.is_empty() {
                    let _ = writeln!(out, "  (no pull requests)");
                }
                for change_request in &report.change_requests {
                    out.push_str(&self.render_change_request(change_request));
                }
            }
            RepositoryOutcome::Failed { error, .. } => {
                let _ = writeln!(
                    out,
                    "  {} {}",
                    self.paint(NOT_READY, Color::Red),
                    self.paint(error, Color::Red)
                );
            }
        }

        out
    }

    /// Renders a pull request line followed by one line per ticket.
    #[must_use]
    pub fn render_change_request(&self, report: &ChangeRequestReport) -> String {
        let mut out = String::new();
        let request = &report.change_request;
        let _ = writeln!(
            out,
            "  {} #{} {}",
            self.symbols(&report.readiness),
            request.number,
            request.title
        );
        for ticket in &report.tickets {
            out.push_str(&self.render_ticket(ticket));
        }
        out
    }

    /// Returns the `[sprint][release]` marker, or `[?]` without tickets.
    #[must_use]
    pub fn symbols(&self, readiness: &ReadinessReport) -> String {
        if readiness.no_tickets_found {
            return format!("[{}]", self.paint(NO_TICKETS, Color::Yellow));
        }

        let sprint = match readiness.sprint {
            SprintReadiness::HasActiveSprint => self.paint(READY, Color::Green),
            SprintReadiness::HasClosedSprintOnly => self.paint(PARTIAL, Color::Yellow),
            SprintReadiness::NoSprint => self.paint(NOT_READY, Color::Red),
        };
        let release = match readiness.release {
            ReleaseReadiness::HasRelease => self.paint(READY, Color::Green),
            ReleaseReadiness::NoRelease => self.paint(NOT_READY, Color::Red),
        };
        format!("[{sprint}][{release}]")
    }

    fn render_ticket(&self, ticket: &Ticket) -> String {
        let release = if ticket.has_release_version() {
            self.paint(&ticket.release_versions.join(", "), Color::Green)
        } else {
            self.paint("NONE", Color::Red)
        };
        let sprint = match &ticket.current_sprint {
            Some(sprint) => self.paint(&sprint.name, Color::Green),
            None => self.paint("NONE", Color::Red),
        };
        format!(
            "      {} {} | release: {} | sprint: {}\n",
            ticket.number, ticket.summary, release, sprint
        )
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            style(text).with(color).to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::readiness::classify;
    use crate::sources::{ChangeRequest, ChangeRequestState};
    use crate::summary::RepositoryReport;
    use crate::tickets::{extract_ticket_ids, TicketPayload};

    fn report(title: &str, payloads: Vec<TicketPayload>) -> ChangeRequestReport {
        let tickets: Vec<Ticket> = extract_ticket_ids(title)
            .into_iter()
            .zip(payloads)
            .map(|(id, payload)| Ticket::aggregate(id, payload))
            .collect();
        ChangeRequestReport {
            change_request: ChangeRequest {
                number: 7,
                title: title.to_string(),
                state: ChangeRequestState::Open,
            },
            readiness: classify(&tickets),
            tickets,
        }
    }

    #[test]
    fn renders_ready_change_request() {
        let request = report(
            "Implement export FOO-100",
            vec![TicketPayload {
                summary: "Export".to_string(),
                release_versions: vec!["2.4.0".to_string()],
                sprints: vec!["id=1,name=Sprint 11,state=ACTIVE,".into()],
            }],
        );

        let text = ReportRenderer::new(false).render_change_request(&request);

        assert_eq!(
            text,
            "  [✔][✔] #7 Implement export FOO-100\n\
             \x20     FOO-100 Export | release: 2.4.0 | sprint: Sprint 11\n"
        );
    }

    #[test]
    fn renders_downgraded_symbols() {
        let request = report(
            "FOO-1 FOO-2",
            vec![
                TicketPayload {
                    sprints: vec!["id=1,name=Old,state=CLOSED,".into()],
                    ..TicketPayload::default()
                },
                TicketPayload {
                    release_versions: vec!["1.0".to_string()],
                    sprints: vec!["id=1,name=Old,state=CLOSED,".into()],
                    ..TicketPayload::default()
                },
            ],
        );

        let renderer = ReportRenderer::new(false);
        assert_eq!(renderer.symbols(&request.readiness), "[~][✘]");
        assert!(renderer
            .render_change_request(&request)
            .contains("release: NONE | sprint: NONE"));
    }

    #[test]
    fn closed_change_request_uses_the_same_line() {
        let mut request = report("Bump dependencies", Vec::new());
        request.change_request.state = ChangeRequestState::Closed;

        let text = ReportRenderer::new(false).render_change_request(&request);
        assert_eq!(text, "  [?] #7 Bump dependencies\n");
    }

    #[test]
    fn renders_no_tickets_marker() {
        let request = report("Bump dependencies", Vec::new());
        assert_eq!(ReportRenderer::new(false).symbols(&request.readiness), "[?]");
    }

    #[test]
    fn renders_failed_repository() {
        let text = ReportRenderer::new(false).render(&[RepositoryOutcome::Failed {
            repository: "web".to_string(),
            error: "boom".to_string(),
        }]);
        assert_eq!(text, "web\n  ✘ boom\n");
    }

    #[test]
    fn renders_empty_repository() {
        let text = ReportRenderer::new(false).render(&[RepositoryOutcome::Audited(
            RepositoryReport {
                repository: "api".to_string(),
                change_requests: Vec::new(),
            },
        )]);
        assert_eq!(text, "api\n  (no pull requests)\n");
    }
}
