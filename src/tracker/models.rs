// Tracker domain models — just the fields the word-frequency pipeline needs.

use serde::Serialize;

/// The caller under whose permissions issues are searched.
///
/// Supplied by whoever hosts the pipeline (CLI config or web layer). The
/// token is sent as the HTTP basic-auth password when present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user: String,
    pub api_token: Option<String>,
}

impl Identity {
    pub fn new(user: impl Into<String>, api_token: Option<String>) -> Self {
        Self {
            user: user.into(),
            api_token,
        }
    }

    /// An identity with no credentials — the tracker sees an anonymous request.
    pub fn anonymous() -> Self {
        Self {
            user: String::new(),
            api_token: None,
        }
    }

    pub fn is_anonymous(&self) -> bool {
        self.user.is_empty()
    }
}

/// A project from the tracker's project directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    /// Opaque identifier used to scope issue queries.
    pub id: String,
    pub key: String,
    pub name: String,
}

/// A single tracked issue. Both text fields may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Issue {
    pub key: String,
    pub summary: Option<String>,
    pub description: Option<String>,
}

impl Issue {
    /// Summary text, or "" when the tracker returned none.
    pub fn summary_text(&self) -> &str {
        self.summary.as_deref().unwrap_or("")
    }

    /// Description text, or "" when the tracker returned none.
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// An issue search scoped to one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueQuery {
    pub project_id: String,
}

impl IssueQuery {
    pub fn for_project(project_id: &str) -> Self {
        Self {
            project_id: project_id.to_string(),
        }
    }

    /// Render as a JQL clause. Numeric ids go in bare, anything else is quoted.
    pub fn to_jql(&self) -> String {
        if !self.project_id.is_empty() && self.project_id.chars().all(|c| c.is_ascii_digit()) {
            format!("project = {}", self.project_id)
        } else {
            let escaped = self.project_id.replace('\\', "\\\\").replace('"', "\\\"");
            format!("project = \"{escaped}\"")
        }
    }
}

/// How many results a search may return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paging {
    /// Every matching issue, fetched page by page until exhausted.
    Unlimited,
    /// At most this many issues.
    Limited(usize),
}

impl Paging {
    /// Maximum number of issues to collect, if any.
    pub fn cap(&self) -> Option<usize> {
        match self {
            Paging::Unlimited => None,
            Paging::Limited(max) => Some(*max),
        }
    }
}
