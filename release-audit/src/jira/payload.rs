//! Jira issue response deserialization.

use crate::sprints::{SprintRecord, SprintState};
use crate::tickets::{SprintEntry, TicketPayload};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

/// Response of `GET /rest/api/2/issue/{key}`.
#[derive(Debug, Deserialize)]
pub(crate) struct JiraIssueResponse {
    #[serde(default)]
    fields: JiraIssueFields,
}

#[derive(Debug, Default, Deserialize)]
struct JiraIssueFields {
    #[serde(default)]
    summary: Option<String>,

    #[serde(default, rename = "fixVersions")]
    fix_versions: Option<Vec<JiraVersion>>,

    /// Custom fields, including the sprint field.
    #[serde(flatten)]
    custom: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct JiraVersion {
    #[serde(default)]
    name: Option<String>,
}

impl JiraIssueResponse {
    /// Extracts the audit payload, reading sprints from `sprint_field`.
    ///
    /// Null or missing fields become empty values.
    pub(crate) fn into_payload(self, sprint_field: &str) -> TicketPayload {
        let fields = self.fields;
        let release_versions = fields
            .fix_versions
            .unwrap_or_default()
            .into_iter()
            .filter_map(|version| version.name)
            .collect();
        let sprints = match fields.custom.get(sprint_field) {
            Some(Value::Array(entries)) => entries.iter().filter_map(sprint_entry).collect(),
            Some(Value::Null) | None => Vec::new(),
            Some(other) => {
                debug!(field = sprint_field, value = %other, "Sprint field is not a list");
                Vec::new()
            }
        };

        TicketPayload {
            summary: fields.summary.unwrap_or_default(),
            release_versions,
            sprints,
        }
    }
}

/// Converts one sprint field entry.
///
/// Older Jira versions return descriptor strings; newer ones return objects,
/// which are read field by field into a record.
fn sprint_entry(entry: &Value) -> Option<SprintEntry> {
    match entry {
        Value::String(descriptor) => Some(SprintEntry::Descriptor(descriptor.clone())),
        Value::Object(object) => Some(SprintEntry::Record(sprint_record(object))),
        other => {
            debug!(value = %other, "Skipping unrecognised sprint entry");
            None
        }
    }
}

/// Reads a sprint object; missing or mistyped fields fall back like descriptors do.
fn sprint_record(object: &Map<String, Value>) -> SprintRecord {
    let id = match object.get("id") {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    };
    let name = object.get("name").and_then(Value::as_str);
    let state = object.get("state").and_then(Value::as_str);

    if id.is_none() || name.is_none() || state.is_none() {
        debug!(value = ?object, "Sprint object is missing fields");
    }

    SprintRecord {
        id: id.unwrap_or(0),
        name: name.unwrap_or_default().to_string(),
        state: state
            .map(|s| SprintState::from_token(&s.trim().to_ascii_uppercase()))
            .unwrap_or_default(),
    }
}
