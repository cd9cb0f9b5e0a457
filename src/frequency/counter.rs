// Insertion-ordered word counter.
//
// Counts live in a Vec in first-seen order, with a HashMap from word to
// position for O(1) increments. The Vec order is the tie-break seed for the
// final ranking, so it must never be reordered before `finish`.

use std::collections::HashMap;

use super::table::{FrequencyTable, WordCount};
use super::tokenize::tokenize;
use crate::tracker::models::Issue;

/// Accumulates word counts across any number of texts or issues.
///
/// Feed it incrementally (one project at a time, say) and call `finish`
/// once to get the ranked table.
#[derive(Debug, Default)]
pub struct FrequencyCounter {
    positions: HashMap<String, usize>,
    entries: Vec<WordCount>,
    issues_seen: usize,
}

impl FrequencyCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every word in `text`.
    pub fn add_text(&mut self, text: &str) {
        for word in tokenize(text) {
            self.add_word(word);
        }
    }

    /// Count the words of one issue: summary first, then description.
    /// Missing fields count as empty text.
    pub fn add_issue(&mut self, issue: &Issue) {
        self.add_text(issue.summary_text());
        self.add_text(issue.description_text());
        self.issues_seen += 1;
    }

    pub fn add_issues<'a>(&mut self, issues: impl IntoIterator<Item = &'a Issue>) {
        for issue in issues {
            self.add_issue(issue);
        }
    }

    fn add_word(&mut self, word: &str) {
        match self.positions.get(word) {
            Some(&idx) => self.entries[idx].count += 1,
            None => {
                self.positions.insert(word.to_string(), self.entries.len());
                self.entries.push(WordCount {
                    word: word.to_string(),
                    count: 1,
                });
            }
        }
    }

    /// Number of issues fed through `add_issue` so far.
    pub fn issues_seen(&self) -> usize {
        self.issues_seen
    }

    /// Number of distinct words so far.
    pub fn distinct_words(&self) -> usize {
        self.entries.len()
    }

    /// Rank the counts and produce the final table.
    pub fn finish(self) -> FrequencyTable {
        FrequencyTable::from_first_seen(self.entries)
    }
}

/// Compute the ranked word frequency table for a set of issues.
pub fn compute_frequency(issues: &[Issue]) -> FrequencyTable {
    let mut counter = FrequencyCounter::new();
    counter.add_issues(issues);
    counter.finish()
}
