// Colored terminal output for frequency tables and project listings.
//
// main.rs display calls delegate here.

use colored::Colorize;

use crate::pipeline::frequency::FrequencyReport;
use crate::tracker::models::Project;

/// Widest word column before truncation kicks in.
const WORD_WIDTH: usize = 32;

/// Display the ranked word table, limited to the top `top` rows.
pub fn display_frequency_report(report: &FrequencyReport, top: usize) {
    if report.words.is_empty() {
        println!(
            "No words found across {} issues in {} projects.",
            report.issue_count, report.project_count
        );
        display_failures(report);
        return;
    }

    let shown = report.words.top(top);
    println!(
        "\n{}",
        format!(
            "=== Word Frequency (top {} of {} words) ===",
            shown.len(),
            report.words.len()
        )
        .bold()
    );
    println!();

    println!(
        "  {:>5}  {:<width$} {:>8}",
        "Rank".dimmed(),
        "Word".dimmed(),
        "Count".dimmed(),
        width = WORD_WIDTH,
    );
    println!("  {}", "-".repeat(WORD_WIDTH + 16).dimmed());

    let max_count = shown.first().map(|e| e.count).unwrap_or(0);
    for (i, entry) in shown.iter().enumerate() {
        let word = super::truncate_chars(&entry.word, WORD_WIDTH - 3);
        let count = format!("{:>8}", entry.count);
        let count = if entry.count == max_count {
            count.bold()
        } else {
            count.normal()
        };
        println!(
            "  {:>4}.  {:<width$} {}",
            i + 1,
            word,
            count,
            width = WORD_WIDTH,
        );
    }

    println!();
    println!(
        "  {} words in {} issues across {} projects",
        report.words.total_count(),
        report.issue_count,
        report.project_count
    );
    display_failures(report);
}

/// Warn about projects whose query failed. Their issues are missing from the totals.
fn display_failures(report: &FrequencyReport) {
    if report.failed_projects.is_empty() {
        return;
    }
    println!(
        "  {} {} project(s) could not be queried:",
        "Warning:".yellow(),
        report.failed_projects.len()
    );
    for failure in &report.failed_projects {
        println!(
            "    {} ({}): {}",
            failure.project_key,
            failure.project_id,
            super::truncate_chars(&failure.error, 120).dimmed()
        );
    }
}

/// Display the project directory.
pub fn display_projects(projects: &[Project]) {
    if projects.is_empty() {
        println!("No projects visible to the configured user.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Projects ({}) ===", projects.len()).bold()
    );
    println!();
    for project in projects {
        println!(
            "  {:<12} {:<10} {}",
            project.key.bold(),
            project.id.dimmed(),
            project.name
        );
    }
    println!();
}
