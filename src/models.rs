use crate::error::ActivityError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One public activity record as returned by the events endpoint.
///
/// Field absence is tolerated here; classification checks what it needs
/// and fails with `ActivityError::Field` when a field is missing.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Event {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub repo: Option<Repo>,
    #[serde(default)]
    pub payload: Value,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Repo {
    pub name: String,
}

/// Payload of a `PushEvent`. Only the commit count is consumed, so the
/// commits stay open-ended JSON.
#[derive(Deserialize, Debug, Clone)]
pub struct PushPayload {
    pub commits: Vec<Value>,
}

/// Payload of an `IssuesEvent` or `PullRequestEvent`.
#[derive(Deserialize, Debug, Clone)]
pub struct ActionPayload {
    pub action: String,
}

/// Decodes the raw response body into events, preserving array order.
pub fn parse_events(body: &str) -> Result<Vec<Event>, ActivityError> {
    serde_json::from_str(body).map_err(ActivityError::Parse)
}
