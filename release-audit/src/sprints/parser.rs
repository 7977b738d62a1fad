//! Lenient parsing of raw sprint descriptors.

use super::record::{SprintRecord, SprintState};
use tracing::debug;

/// Parses one raw sprint descriptor into a [`SprintRecord`].
///
/// Descriptors are `key=value` pairs separated by commas, optionally wrapped
/// in the object notation Jira uses for the sprint field:
///
/// ```text
/// com.atlassian.greenhopper.service.sprint.Sprint@1f3a[id=42,rapidViewId=7,state=ACTIVE,name=Sprint 7,...]
/// ```
///
/// The notation is only recognised when the text before the first `[` holds a
/// `Type@hash` marker, so plain descriptors may carry brackets in a name.
/// Values run up to the next comma and are trimmed.
///
/// Field order is not significant. Parsing never fails: a missing or
/// unparsable `id` becomes `0`, a missing `name` becomes empty and a missing
/// or unrecognised `state` becomes [`SprintState::Unknown`].
#[must_use]
pub fn parse_sprint(descriptor: &str) -> SprintRecord {
    let mut id = None;
    let mut name = None;
    let mut state = None;

    for (key, value) in fields(strip_wrapper(descriptor)) {
        match key {
            "id" => id = Some(value),
            "name" => name = Some(value),
            "state" => state = Some(value),
            _ => {}
        }
    }

    if id.is_none() || name.is_none() || state.is_none() {
        debug!(descriptor, "Sprint descriptor is missing fields");
    }

    SprintRecord {
        id: id.and_then(|v| v.parse().ok()).unwrap_or(0),
        name: name.map(str::to_string).unwrap_or_default(),
        state: state.map(SprintState::from_token).unwrap_or_default(),
    }
}

/// Returns the contents of `Type@hash[...]` notation, or the input unchanged.
fn strip_wrapper(descriptor: &str) -> &str {
    let descriptor = descriptor.trim();
    match descriptor.split_once('[') {
        Some((head, body)) if head.contains('@') && !head.contains('=') => {
            body.strip_suffix(']').unwrap_or(body)
        }
        _ => descriptor,
    }
}

/// Splits a descriptor into `(key, value)` pairs on commas and the first `=`.
///
/// Segments without `=` are skipped.
fn fields(body: &str) -> impl Iterator<Item = (&str, &str)> {
    body.split(',')
        .filter_map(|segment| segment.split_once('='))
        .map(|(key, value)| (key.trim(), value.trim()))
}
