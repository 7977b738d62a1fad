//! Sprint descriptors and active sprint selection.

mod parser;
mod record;

pub use parser::parse_sprint;
pub use record::{SprintRecord, SprintState};

/// Returns the active sprint among a ticket's sprint memberships.
///
/// If more than one record is active, the last one wins.
#[must_use]
pub fn select_active_sprint(sprints: &[SprintRecord]) -> Option<&SprintRecord> {
    sprints.iter().fold(None, |current, sprint| {
        if sprint.is_active() {
            Some(sprint)
        } else {
            current
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sprint(id: u64, state: SprintState) -> SprintRecord {
        SprintRecord {
            id,
            name: format!("Sprint {id}"),
            state,
        }
    }

    #[test]
    fn selects_last_active_sprint() {
        let sprints = vec![
            sprint(0, SprintState::Closed),
            sprint(1, SprintState::Active),
            sprint(2, SprintState::Active),
        ];

        let selected = select_active_sprint(&sprints).unwrap();
        assert_eq!(selected.id, 2);
    }

    #[test]
    fn no_active_sprint_selects_nothing() {
        let sprints = vec![
            sprint(1, SprintState::Closed),
            sprint(2, SprintState::Future),
            sprint(3, SprintState::Unknown),
        ];

        assert!(select_active_sprint(&sprints).is_none());
        assert!(select_active_sprint(&[]).is_none());
    }
}
