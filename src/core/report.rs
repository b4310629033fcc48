//! Attendance aggregation: first-seen-ordered frequency counts and the
//! three-breakdown report built on top of them.

use crate::export::markdown::to_markdown_table;
use crate::models::AttendanceRecord;
use std::collections::HashMap;

/// Ordered mapping key -> count. Iteration follows the order in which each
/// key was first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Counts {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl Counts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, key: &str) {
        match self.index.get(key) {
            Some(&pos) => self.entries[pos].1 += 1,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), 1));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<usize> {
        self.index.get(key).map(|&pos| self.entries[pos].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(k, n)| (k.as_str(), *n))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, n)| n).sum()
    }
}

/// Count occurrences of `key_fn(record)` across `records`.
pub fn count_by<T, F>(records: &[T], key_fn: F) -> Counts
where
    F: Fn(&T) -> &str,
{
    let mut counts = Counts::new();
    for r in records {
        counts.increment(key_fn(r));
    }
    counts
}

/// Attendance breakdowns shown by the `report` command.
#[derive(Debug, Clone)]
pub struct Report {
    pub total_events: usize,
    pub total_attendees: usize,
    pub by_event: Counts,
    pub by_gender: Counts,
    pub by_province: Counts,
}

impl Report {
    pub fn build(total_events: usize, records: &[AttendanceRecord]) -> Self {
        Self {
            total_events,
            total_attendees: records.len(),
            by_event: count_by(records, |r| r.event_title.as_str()),
            by_gender: count_by(records, |r| r.gender.as_str()),
            by_province: count_by(records, |r| r.province.as_str()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_attendees == 0
    }

    pub fn to_markdown(&self) -> String {
        let sections = [
            ("Attendance by Event", "Event", &self.by_event),
            ("Attendance by Gender", "Gender", &self.by_gender),
            ("Attendance by Province", "Province", &self.by_province),
        ];

        let mut out = format!(
            "Total Events: {}\nTotal Attendees: {}\n",
            self.total_events, self.total_attendees
        );

        for (title, header, counts) in sections {
            out.push_str(&format!(
                "\n## {}\n\n{}\n",
                title,
                to_markdown_table(counts, header, "Count")
            ));
        }

        out
    }
}
