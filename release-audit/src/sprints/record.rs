//! Sprint record types.

use serde::Serialize;

/// Lifecycle state of a sprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SprintState {
    /// The sprint is currently running.
    Active,

    /// The sprint has been completed.
    Closed,

    /// The sprint is planned but not started.
    Future,

    /// The state was missing or not recognised.
    #[default]
    Unknown,
}

impl SprintState {
    /// Maps an upstream state token to a [`SprintState`].
    ///
    /// Only exact uppercase tokens are recognised.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match token {
            "ACTIVE" => Self::Active,
            "CLOSED" => Self::Closed,
            "FUTURE" => Self::Future,
            _ => Self::Unknown,
        }
    }
}

/// A single sprint membership of a ticket.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SprintRecord {
    /// Upstream sprint ID, `0` when unavailable.
    pub id: u64,

    /// Sprint name, empty when unavailable.
    pub name: String,

    /// Sprint lifecycle state.
    pub state: SprintState,
}

impl SprintRecord {
    /// Returns true if the sprint is currently running.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state == SprintState::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_state_tokens() {
        assert_eq!(SprintState::from_token("ACTIVE"), SprintState::Active);
        assert_eq!(SprintState::from_token("CLOSED"), SprintState::Closed);
        assert_eq!(SprintState::from_token("FUTURE"), SprintState::Future);
    }

    #[test]
    fn unrecognised_tokens_are_unknown() {
        assert_eq!(SprintState::from_token("active"), SprintState::Unknown);
        assert_eq!(SprintState::from_token(""), SprintState::Unknown);
        assert_eq!(SprintState::from_token("PAUSED"), SprintState::Unknown);
    }
}
