// REST client for a Jira-compatible issue tracker.
//
// Implements both collaborator traits over `/rest/api/2`. The project
// directory is read with the service identity the client was built with;
// issue searches run under whichever identity the caller passes in.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use super::models::{Identity, Issue, IssueQuery, Paging, Project};
use super::traits::{IssueSearch, ProjectDirectory};

/// Default number of issues requested per search page.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Fields requested from the search endpoint. Nothing else is needed.
const SEARCH_FIELDS: &str = "summary,description";

/// Thin reqwest wrapper with a generic authenticated GET helper.
pub struct TrackerClient {
    client: reqwest::Client,
    base_url: String,
    service_identity: Identity,
    page_size: usize,
}

impl TrackerClient {
    /// Create a client for the tracker at `base_url`.
    ///
    /// `service_identity` is used for the project listing, which is not
    /// scoped to a caller.
    pub fn new(base_url: &str, service_identity: Identity) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("wordfreq/0.1 (issue word frequency)")
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            service_identity,
            page_size: DEFAULT_PAGE_SIZE,
        })
    }

    /// Override the per-request page size (clamped to at least 1).
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// GET a REST resource as `identity` and deserialize the JSON body.
    async fn api_get<T: DeserializeOwned>(
        &self,
        identity: &Identity,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let url = format!("{}/rest/api/2/{}", self.base_url, path);

        debug!(path = path, user = %identity.user, "Tracker GET request");

        let mut request = self.client.get(&url).query(params);
        if !identity.is_anonymous() {
            request = request.basic_auth(&identity.user, identity.api_token.as_deref());
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("Tracker request failed: {path}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Tracker {path} returned {status}: {body}");
        }

        response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to deserialize {path} response"))
    }

    /// Fetch one page of search results starting at `start_at`.
    async fn search_page(
        &self,
        identity: &Identity,
        jql: &str,
        start_at: usize,
        max_results: usize,
    ) -> Result<SearchResponse> {
        let start = start_at.to_string();
        let max = max_results.to_string();
        self.api_get(
            identity,
            "search",
            &[
                ("jql", jql),
                ("startAt", &start),
                ("maxResults", &max),
                ("fields", SEARCH_FIELDS),
            ],
        )
        .await
    }
}

#[async_trait]
impl ProjectDirectory for TrackerClient {
    async fn list_all_projects(&self) -> Result<Vec<Project>> {
        let projects: Vec<ProjectResponse> = self
            .api_get(&self.service_identity, "project", &[])
            .await
            .context("Failed to list tracker projects")?;

        Ok(projects.into_iter().map(Project::from).collect())
    }
}

#[async_trait]
impl IssueSearch for TrackerClient {
    async fn search(
        &self,
        identity: &Identity,
        query: &IssueQuery,
        paging: Paging,
    ) -> Result<Vec<Issue>> {
        let jql = query.to_jql();
        let cap = paging.cap();
        let mut issues = Vec::new();
        let mut start_at = 0usize;

        loop {
            let want = match cap {
                Some(max) => max.saturating_sub(issues.len()).min(self.page_size),
                None => self.page_size,
            };
            if want == 0 {
                break;
            }

            let page = self
                .search_page(identity, &jql, start_at, want)
                .await
                .with_context(|| format!("Search failed for `{jql}`"))?;

            let page_len = page.issues.len();
            let total = page.total;
            issues.extend(page.issues.into_iter().map(Issue::from));

            debug!(
                jql = %jql,
                page_issues = page_len,
                total_collected = issues.len(),
                total = ?total,
                "Fetched page of issues"
            );

            match next_start_at(start_at, page_len, total) {
                Some(next) => start_at = next,
                None => break,
            }
        }

        if let Some(max) = cap {
            issues.truncate(max);
        }

        Ok(issues)
    }
}

/// Where the next page starts, or `None` once the result set is exhausted.
///
/// The server may hand back fewer issues than requested, so the offset
/// advances by the actual page length. An empty page always ends the scan.
/// Without a `total` there is no way to tell a short page from the last
/// one, so paging continues until a page comes back empty.
pub fn next_start_at(start_at: usize, page_len: usize, total: Option<usize>) -> Option<usize> {
    if page_len == 0 {
        return None;
    }
    let next = start_at + page_len;
    match total {
        Some(total) if next >= total => None,
        _ => Some(next),
    }
}

// -- Serde types for /rest/api/2/project --

/// One entry of the project listing.
#[derive(Debug, Deserialize)]
pub struct ProjectResponse {
    pub id: String,
    pub key: String,
    #[serde(default)]
    pub name: String,
}

impl From<ProjectResponse> for Project {
    fn from(p: ProjectResponse) -> Self {
        Project {
            id: p.id,
            key: p.key,
            name: p.name,
        }
    }
}

// -- Serde types for /rest/api/2/search --

/// One page of search results.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// Size of the whole result set. Some servers leave it out.
    pub total: Option<usize>,
    #[serde(default)]
    pub issues: Vec<IssueResponse>,
}

/// A search hit. `fields` only carries what `SEARCH_FIELDS` asked for.
#[derive(Debug, Deserialize)]
pub struct IssueResponse {
    pub key: String,
    #[serde(default)]
    pub fields: IssueFields,
}

#[derive(Debug, Default, Deserialize)]
pub struct IssueFields {
    pub summary: Option<String>,
    pub description: Option<String>,
}

impl From<IssueResponse> for Issue {
    fn from(r: IssueResponse) -> Self {
        Issue {
            key: r.key,
            summary: r.fields.summary,
            description: r.fields.description,
        }
    }
}
