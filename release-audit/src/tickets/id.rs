//! Ticket keys and their extraction from free text.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

/// Three or four uppercase letters, a hyphen or space, then digits.
static TICKET_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Z]{3,4}[- ][0-9]+").expect("ticket pattern is valid"));

/// A normalised ticket key such as `FOO-123`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TicketId(String);

impl TicketId {
    /// Builds a key from a matched reference, turning a space separator into a hyphen.
    fn from_match(reference: &str) -> Self {
        Self(reference.replacen(' ', "-", 1))
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extracts ticket keys from a pull request title.
///
/// Keys are returned in order of occurrence. Duplicates are kept.
///
/// # Examples
///
/// ```
/// use release_audit::extract_ticket_ids;
///
/// let ids = extract_ticket_ids("Fix BUG-123 and ABCD 456");
/// let keys: Vec<&str> = ids.iter().map(|id| id.as_str()).collect();
/// assert_eq!(keys, ["BUG-123", "ABCD-456"]);
/// ```
#[must_use]
pub fn extract_ticket_ids(title: &str) -> Vec<TicketId> {
    TICKET_PATTERN
        .find_iter(title)
        .map(|m| TicketId::from_match(m.as_str()))
        .collect()
}
