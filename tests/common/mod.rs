// In-memory tracker fake shared by the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;

use wordfreq::tracker::models::{Identity, Issue, IssueQuery, Paging, Project};
use wordfreq::tracker::traits::{IssueSearch, ProjectDirectory};

/// Serves a fixed project list and per-project issue lists. Projects listed
/// in `failing` return an error from `search`.
#[derive(Default)]
pub struct FakeTracker {
    pub projects: Vec<Project>,
    pub issues: HashMap<String, Vec<Issue>>,
    pub failing: Vec<String>,
    pub directory_down: bool,
    /// Every (user, project_id, paging) the fake was searched with.
    pub calls: Mutex<Vec<(String, String, Paging)>>,
}

impl FakeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_project(mut self, id: &str, key: &str, issues: Vec<Issue>) -> Self {
        self.projects.push(project(id, key));
        self.issues.insert(id.to_string(), issues);
        self
    }

    pub fn with_failing_project(mut self, id: &str, key: &str) -> Self {
        self.projects.push(project(id, key));
        self.failing.push(id.to_string());
        self
    }

    pub fn with_directory_down(mut self) -> Self {
        self.directory_down = true;
        self
    }

    pub fn recorded_calls(&self) -> Vec<(String, String, Paging)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProjectDirectory for FakeTracker {
    async fn list_all_projects(&self) -> Result<Vec<Project>> {
        if self.directory_down {
            anyhow::bail!("project directory unavailable");
        }
        Ok(self.projects.clone())
    }
}

#[async_trait]
impl IssueSearch for FakeTracker {
    async fn search(
        &self,
        identity: &Identity,
        query: &IssueQuery,
        paging: Paging,
    ) -> Result<Vec<Issue>> {
        self.calls.lock().unwrap().push((
            identity.user.clone(),
            query.project_id.clone(),
            paging,
        ));
        if self.failing.contains(&query.project_id) {
            anyhow::bail!("Error in the JQL Query: project {}", query.project_id);
        }
        let issues = self.issues.get(&query.project_id).cloned().unwrap_or_default();
        Ok(match paging.cap() {
            Some(max) => issues.into_iter().take(max).collect(),
            None => issues,
        })
    }
}

pub fn project(id: &str, key: &str) -> Project {
    Project {
        id: id.to_string(),
        key: key.to_string(),
        name: format!("{key} project"),
    }
}

pub fn issue(key: &str, summary: Option<&str>, description: Option<&str>) -> Issue {
    Issue {
        key: key.to_string(),
        summary: summary.map(str::to_string),
        description: description.map(str::to_string),
    }
}
