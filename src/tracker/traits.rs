// Collaborator traits — the two capabilities the pipeline consumes.
//
// The REST client implements both. Tests provide in-memory fakes.

use anyhow::Result;
use async_trait::async_trait;

use super::models::{Identity, Issue, IssueQuery, Paging, Project};

/// Lists every project known to the tracker.
#[async_trait]
pub trait ProjectDirectory: Send + Sync {
    async fn list_all_projects(&self) -> Result<Vec<Project>>;
}

/// Executes issue searches under a caller's permissions.
#[async_trait]
pub trait IssueSearch: Send + Sync {
    /// Run `query` as `identity`. With `Paging::Unlimited` every matching
    /// issue must be returned, never just the first page.
    async fn search(
        &self,
        identity: &Identity,
        query: &IssueQuery,
        paging: Paging,
    ) -> Result<Vec<Issue>>;
}
