#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod github;
pub mod jira;
pub mod readiness;
pub mod report;
pub mod runner;
pub mod sources;
pub mod sprints;
pub mod summary;
pub mod tickets;

pub use config::{
    AuditConfig, ConfigError, ConfigFile, ConfigOverrides, JiraSettings, DEFAULT_CONFIG_FILE,
};
pub use github::GitHubClient;
pub use jira::JiraClient;
pub use readiness::{
    classify, classify_with, DowngradePolicy, ReadinessReport, ReleaseReadiness, SprintReadiness,
};
pub use report::ReportRenderer;
pub use runner::{Runner, RunnerError};
pub use sources::{
    ChangeRequest, ChangeRequestSource, ChangeRequestState, TicketSource, TransportError,
};
pub use sprints::{parse_sprint, select_active_sprint, SprintRecord, SprintState};
pub use summary::{ChangeRequestReport, RepositoryOutcome, RepositoryReport, RunSummary};
pub use tickets::{
    extract_ticket_ids, lookup_tickets, LookupError, SprintEntry, Ticket, TicketId, TicketPayload,
};
