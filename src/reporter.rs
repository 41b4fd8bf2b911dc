use crate::error::ActivityError;
use crate::models::{ActionPayload, Event, PushPayload};
use log::info;
use serde::Serialize;
use serde_json::Value;
use std::io::{self, Write};

/// Walks decoded events in order, printing one block per event and keeping
/// a serialized snapshot of each classified event per category.
pub struct ActivityReporter<W: Write> {
    user: String,
    out: W,
    pushes: Vec<String>,
    issues: Vec<String>,
    requests: Vec<String>,
}

impl ActivityReporter<io::Stdout> {
    pub fn new(user: impl Into<String>) -> Self {
        Self::with_output(user, io::stdout())
    }
}

impl<W: Write> ActivityReporter<W> {
    pub fn with_output(user: impl Into<String>, out: W) -> Self {
        Self {
            user: user.into(),
            out,
            pushes: Vec::new(),
            issues: Vec::new(),
            requests: Vec::new(),
        }
    }

    pub fn report(&mut self, events: &[Event]) -> Result<(), ActivityError> {
        info!("Processing {} events", events.len());
        writeln!(
            self.out,
            "GitHub activity for {} ({} events):\n",
            self.user,
            events.len()
        )?;

        for (index, event) in events.iter().enumerate() {
            self.classify(index, event)?;
            writeln!(self.out, "#")?;
        }
        Ok(())
    }

    fn classify(&mut self, index: usize, event: &Event) -> Result<(), ActivityError> {
        if event.kind.is_empty() {
            return Err(missing(index, event, "type"));
        }
        let repo = event
            .repo
            .as_ref()
            .map(|repo| repo.name.as_str())
            .ok_or_else(|| missing(index, event, "repo.name"))?;

        match event.kind.as_str() {
            "PushEvent" => self.handle_push(index, event, repo),
            "IssuesEvent" => self.handle_issues(index, event, repo),
            "PullRequestEvent" => self.handle_pull_request(index, event, repo),
            other => {
                writeln!(self.out, "Unknown event type: {} in {}", other, repo)?;
                Ok(())
            }
        }
    }

    fn handle_push(&mut self, index: usize, event: &Event, repo: &str) -> Result<(), ActivityError> {
        let payload: PushPayload = serde_json::from_value(event.payload.clone())
            .map_err(|_| missing(index, event, "payload.commits"))?;
        writeln!(self.out, "Pushed {} commits to {}", payload.commits.len(), repo)?;
        self.pushes.push(Value::Array(payload.commits).to_string());
        Ok(())
    }

    fn handle_issues(
        &mut self,
        index: usize,
        event: &Event,
        repo: &str,
    ) -> Result<(), ActivityError> {
        let payload: ActionPayload = serde_json::from_value(event.payload.clone())
            .map_err(|_| missing(index, event, "payload.action"))?;
        writeln!(
            self.out,
            "Opened a new issue in {} with action: {}",
            repo, payload.action
        )?;
        self.issues.push(snapshot(event));
        Ok(())
    }

    fn handle_pull_request(
        &mut self,
        index: usize,
        event: &Event,
        repo: &str,
    ) -> Result<(), ActivityError> {
        let payload: ActionPayload = serde_json::from_value(event.payload.clone())
            .map_err(|_| missing(index, event, "payload.action"))?;
        writeln!(
            self.out,
            "Opened a pull request in {} with action: {}",
            repo, payload.action
        )?;
        self.requests.push(snapshot(event));
        Ok(())
    }
}

fn missing(index: usize, event: &Event, field: &'static str) -> ActivityError {
    ActivityError::Field {
        index,
        kind: event.kind.clone(),
        field,
    }
}

fn snapshot<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}
