//! Readiness status types.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Sprint readiness of a change request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SprintReadiness {
    /// Every ticket is in an active sprint.
    HasActiveSprint,

    /// A ticket has only closed or future sprints.
    HasClosedSprintOnly,

    /// A ticket was never planned into a sprint.
    NoSprint,
}

impl SprintReadiness {
    /// Orders states from best to worst.
    fn severity(self) -> u8 {
        match self {
            Self::HasActiveSprint => 0,
            Self::HasClosedSprintOnly => 1,
            Self::NoSprint => 2,
        }
    }

    /// Returns the worse of two states.
    #[must_use]
    pub fn worst(self, other: Self) -> Self {
        if other.severity() > self.severity() {
            other
        } else {
            self
        }
    }
}

/// Release readiness of a change request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReleaseReadiness {
    /// Every ticket has a fix version.
    HasRelease,

    /// At least one ticket has no fix version.
    NoRelease,
}

/// How sprint downgrades combine across the tickets of one change request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DowngradePolicy {
    /// Each ticket without an active sprint overwrites the sprint status, so
    /// the last such ticket decides.
    #[default]
    LastWins,

    /// The worst status across all tickets is kept regardless of order.
    WorstCase,
}

impl DowngradePolicy {
    /// Returns the policy as its configuration name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LastWins => "last-wins",
            Self::WorstCase => "worst-case",
        }
    }
}

impl FromStr for DowngradePolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        [Self::LastWins, Self::WorstCase]
            .into_iter()
            .find(|policy| policy.as_str() == value)
            .ok_or_else(|| {
                format!("unknown policy '{value}', expected 'last-wins' or 'worst-case'")
            })
    }
}

/// Readiness of a single change request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReadinessReport {
    /// Sprint status. Not meaningful when `no_tickets_found` is set.
    pub sprint: SprintReadiness,

    /// Release status. Not meaningful when `no_tickets_found` is set.
    pub release: ReleaseReadiness,

    /// The change request referenced no tickets.
    pub no_tickets_found: bool,
}

impl ReadinessReport {
    /// Returns true if tickets were found and all are in an active sprint with a release.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        !self.no_tickets_found
            && self.sprint == SprintReadiness::HasActiveSprint
            && self.release == ReleaseReadiness::HasRelease
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_policy_names() {
        assert_eq!("last-wins".parse::<DowngradePolicy>(), Ok(DowngradePolicy::LastWins));
        assert_eq!("worst-case".parse::<DowngradePolicy>(), Ok(DowngradePolicy::WorstCase));
        assert!("strict".parse::<DowngradePolicy>().is_err());
        assert!("Worst-Case".parse::<DowngradePolicy>().is_err());
    }

    #[test]
    fn policy_names_round_trip() {
        for policy in [DowngradePolicy::LastWins, DowngradePolicy::WorstCase] {
            assert_eq!(policy.as_str().parse::<DowngradePolicy>(), Ok(policy));
        }
    }
}
