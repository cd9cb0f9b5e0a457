// Tests for the issue fetcher and the frequency pipeline, driven by an
// in-memory tracker so no network is involved.

mod common;

use std::sync::Arc;

use common::{issue, FakeTracker};
use wordfreq::pipeline::fetch::IssueFetcher;
use wordfreq::pipeline::frequency;
use wordfreq::tracker::models::{Identity, Paging};

fn fetcher_for(tracker: FakeTracker) -> (Arc<FakeTracker>, IssueFetcher) {
    let tracker = Arc::new(tracker);
    let fetcher = IssueFetcher::new(tracker.clone(), tracker.clone());
    (tracker, fetcher)
}

fn alice() -> Identity {
    Identity::new("alice", Some("token".to_string()))
}

// ============================================================
// IssueFetcher
// ============================================================

#[tokio::test]
async fn fetches_in_project_then_search_order() {
    let (_, fetcher) = fetcher_for(
        FakeTracker::new()
            .with_project(
                "10",
                "AAA",
                vec![issue("AAA-1", Some("a1"), None), issue("AAA-2", Some("a2"), None)],
            )
            .with_project("20", "BBB", vec![issue("BBB-1", Some("b1"), None)]),
    );

    let fetched = fetcher.fetch_all_issues(&alice()).await.unwrap();
    let keys: Vec<&str> = fetched.issues.iter().map(|i| i.key.as_str()).collect();
    assert_eq!(keys, vec!["AAA-1", "AAA-2", "BBB-1"]);
    assert_eq!(fetched.summary.project_count, 2);
    assert_eq!(fetched.summary.issue_count, 3);
    assert!(fetched.summary.failures.is_empty());
}

#[tokio::test]
async fn searches_every_project_unlimited_as_caller() {
    let (tracker, fetcher) = fetcher_for(
        FakeTracker::new()
            .with_project("10", "AAA", vec![])
            .with_project("20", "BBB", vec![]),
    );

    fetcher.fetch_all_issues(&alice()).await.unwrap();

    assert_eq!(
        tracker.recorded_calls(),
        vec![
            ("alice".to_string(), "10".to_string(), Paging::Unlimited),
            ("alice".to_string(), "20".to_string(), Paging::Unlimited),
        ]
    );
}

#[tokio::test]
async fn failing_project_is_skipped_and_recorded() {
    let (tracker, fetcher) = fetcher_for(
        FakeTracker::new()
            .with_project("10", "AAA", vec![issue("AAA-1", Some("before"), None)])
            .with_failing_project("20", "BAD")
            .with_project("30", "CCC", vec![issue("CCC-1", Some("after"), None)]),
    );

    let fetched = fetcher.fetch_all_issues(&alice()).await.unwrap();

    let keys: Vec<&str> = fetched.issues.iter().map(|i| i.key.as_str()).collect();
    assert_eq!(keys, vec!["AAA-1", "CCC-1"]);
    assert_eq!(fetched.summary.failures.len(), 1);
    assert_eq!(fetched.summary.failures[0].project_id, "20");
    assert_eq!(fetched.summary.failures[0].project_key, "BAD");
    assert!(fetched.summary.failures[0].error.contains("JQL"));
    // The project after the failure was still queried.
    assert_eq!(tracker.recorded_calls().len(), 3);
}

#[tokio::test]
async fn directory_failure_is_fatal() {
    let (tracker, fetcher) = fetcher_for(
        FakeTracker::new()
            .with_project("10", "AAA", vec![issue("AAA-1", Some("x"), None)])
            .with_directory_down(),
    );

    let result = fetcher.fetch_all_issues(&alice()).await;
    assert!(result.is_err());
    assert!(tracker.recorded_calls().is_empty());
}

#[tokio::test]
async fn no_projects_is_an_empty_success() {
    let (_, fetcher) = fetcher_for(FakeTracker::new());
    let fetched = fetcher.fetch_all_issues(&alice()).await.unwrap();
    assert!(fetched.issues.is_empty());
    assert_eq!(fetched.summary.project_count, 0);
}

// ============================================================
// Frequency pipeline
// ============================================================

#[tokio::test]
async fn pipeline_counts_across_projects() {
    let (_, fetcher) = fetcher_for(
        FakeTracker::new()
            .with_project(
                "10",
                "AAA",
                vec![issue("AAA-1", Some("Bug bug"), Some("fix it"))],
            )
            .with_project("20", "BBB", vec![issue("BBB-1", Some("bug found"), Some(""))]),
    );

    let report = frequency::run(&fetcher, &alice()).await.unwrap();

    let rows: Vec<(&str, u64)> = report
        .words
        .iter()
        .map(|e| (e.word.as_str(), e.count))
        .collect();
    assert_eq!(
        rows,
        vec![("bug", 2), ("Bug", 1), ("fix", 1), ("it", 1), ("found", 1)]
    );
    assert_eq!(report.issue_count, 2);
    assert_eq!(report.project_count, 2);
    assert!(report.failed_projects.is_empty());
}

#[tokio::test]
async fn pipeline_survives_failed_project() {
    let (_, fetcher) = fetcher_for(
        FakeTracker::new()
            .with_failing_project("10", "BAD")
            .with_project("20", "OK", vec![issue("OK-1", Some("still counted"), None)]),
    );

    let report = frequency::run(&fetcher, &alice()).await.unwrap();
    assert_eq!(report.words.get("still"), Some(1));
    assert_eq!(report.words.get("counted"), Some(1));
    assert_eq!(report.failed_projects.len(), 1);
}

#[tokio::test]
async fn pipeline_matches_batch_fetch_and_is_idempotent() {
    let (_, fetcher) = fetcher_for(
        FakeTracker::new()
            .with_project(
                "10",
                "AAA",
                vec![
                    issue("AAA-1", Some("login fails"), Some("login page returns 500")),
                    issue("AAA-2", None, Some("page layout broken")),
                ],
            )
            .with_project("20", "BBB", vec![issue("BBB-1", Some("500 on login"), None)]),
    );

    let first = frequency::run(&fetcher, &alice()).await.unwrap();
    let second = frequency::run(&fetcher, &alice()).await.unwrap();
    assert_eq!(first.words, second.words);

    let fetched = fetcher.fetch_all_issues(&alice()).await.unwrap();
    assert_eq!(
        first.words,
        wordfreq::frequency::compute_frequency(&fetched.issues)
    );
}

#[tokio::test]
async fn pipeline_reports_timestamp() {
    let (_, fetcher) = fetcher_for(FakeTracker::new());
    let report = frequency::run(&fetcher, &alice()).await.unwrap();
    assert!(report.words.is_empty());
    assert!(chrono::DateTime::parse_from_rfc3339(&report.computed_at).is_ok());
}
