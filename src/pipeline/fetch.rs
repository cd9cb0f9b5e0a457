// Issue fetching across every project in the tracker.
//
// Projects are queried one at a time, in directory order, with unlimited
// paging. A failing project is logged and recorded but never aborts the
// run; only a failure to list projects at all is fatal.

use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::tracker::models::{Identity, Issue, IssueQuery, Paging, Project};
use crate::tracker::traits::{IssueSearch, ProjectDirectory};

/// A project whose issue query failed during a fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectFailure {
    pub project_id: String,
    pub project_key: String,
    pub error: String,
}

/// What a full fetch visited, minus the issues themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FetchSummary {
    pub project_count: usize,
    pub issue_count: usize,
    pub failures: Vec<ProjectFailure>,
}

/// Every issue visible to an identity, in project order, plus the summary.
#[derive(Debug, Clone, Default)]
pub struct FetchedIssues {
    pub issues: Vec<Issue>,
    pub summary: FetchSummary,
}

/// Enumerates projects and pulls all of their issues.
///
/// Both collaborators are handed in explicitly so tests can swap in fakes.
#[derive(Clone)]
pub struct IssueFetcher {
    directory: Arc<dyn ProjectDirectory>,
    search: Arc<dyn IssueSearch>,
}

impl IssueFetcher {
    pub fn new(directory: Arc<dyn ProjectDirectory>, search: Arc<dyn IssueSearch>) -> Self {
        Self { directory, search }
    }

    /// List every project in the directory.
    pub async fn projects(&self) -> Result<Vec<Project>> {
        self.directory
            .list_all_projects()
            .await
            .context("Failed to enumerate projects")
    }

    /// Fetch all issues, handing each project's batch to `on_project` as
    /// soon as it arrives. Failed projects are skipped, not retried.
    pub async fn for_each_project<F>(
        &self,
        identity: &Identity,
        mut on_project: F,
    ) -> Result<FetchSummary>
    where
        F: FnMut(&Project, Vec<Issue>),
    {
        let projects = self.projects().await?;
        let mut summary = FetchSummary {
            project_count: projects.len(),
            ..FetchSummary::default()
        };

        for project in &projects {
            let query = IssueQuery::for_project(&project.id);
            match self.search.search(identity, &query, Paging::Unlimited).await {
                Ok(issues) => {
                    debug!(
                        project_key = %project.key,
                        issues = issues.len(),
                        "Fetched project issues"
                    );
                    summary.issue_count += issues.len();
                    on_project(project, issues);
                }
                Err(e) => {
                    let error = format!("{e:#}");
                    warn!(
                        project_id = %project.id,
                        project_key = %project.key,
                        error = %error,
                        "Issue query failed, skipping project"
                    );
                    summary.failures.push(ProjectFailure {
                        project_id: project.id.clone(),
                        project_key: project.key.clone(),
                        error,
                    });
                }
            }
        }

        info!(
            projects = summary.project_count,
            issues = summary.issue_count,
            failed = summary.failures.len(),
            "Issue fetch complete"
        );

        Ok(summary)
    }

    /// Fetch every issue visible to `identity` into one list.
    pub async fn fetch_all_issues(&self, identity: &Identity) -> Result<FetchedIssues> {
        let mut issues = Vec::new();
        let summary = self
            .for_each_project(identity, |_, batch| issues.extend(batch))
            .await?;
        Ok(FetchedIssues { issues, summary })
    }
}
