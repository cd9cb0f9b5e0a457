// Word frequency pipeline: fetch → count → rank.
//
// Issues are counted project by project as they arrive rather than held in
// one big list, so memory is bounded by the distinct vocabulary plus one
// project's issues.

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;
use tracing::info;

use super::fetch::{IssueFetcher, ProjectFailure};
use crate::frequency::{FrequencyCounter, FrequencyTable};
use crate::tracker::models::Identity;

/// A freshly computed frequency table with the context it was built from.
#[derive(Debug, Clone, Serialize)]
pub struct FrequencyReport {
    pub words: FrequencyTable,
    pub issue_count: usize,
    pub project_count: usize,
    pub failed_projects: Vec<ProjectFailure>,
    /// RFC 3339 timestamp of when the computation finished.
    pub computed_at: String,
}

/// Run the whole pipeline for `identity`. Fails only if the project
/// directory itself can't be read.
pub async fn run(fetcher: &IssueFetcher, identity: &Identity) -> Result<FrequencyReport> {
    let mut counter = FrequencyCounter::new();
    let summary = fetcher
        .for_each_project(identity, |_, issues| counter.add_issues(&issues))
        .await?;

    let distinct = counter.distinct_words();
    let words = counter.finish();

    info!(
        issues = summary.issue_count,
        distinct_words = distinct,
        total_words = words.total_count(),
        "Word frequency computed"
    );

    Ok(FrequencyReport {
        words,
        issue_count: summary.issue_count,
        project_count: summary.project_count,
        failed_projects: summary.failures,
        computed_at: Utc::now().to_rfc3339(),
    })
}
