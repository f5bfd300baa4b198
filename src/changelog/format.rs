//! Changelog data model shared by the parser and the renderers.

use chrono::{DateTime, FixedOffset};

/// Whether a version section has been released yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseStatus {
    Released,
    Unreleased,
}

/// A single categorized change description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEntry {
    pub category: String,
    pub description: String,
}

/// One parsed version section with its metadata and entries.
#[derive(Debug, Clone)]
pub struct ReleaseRecord {
    pub version: String,
    pub status: ReleaseStatus,
    /// For released versions: the date from the document, offset preserved.
    /// For unreleased versions: the time of parsing, in UTC.
    pub timestamp: DateTime<FixedOffset>,
    pub maintainer: String,
    pub email: String,
    /// Insertion order from the document; duplicates across entries allowed.
    pub entries: Vec<ChangeEntry>,
}

impl ReleaseRecord {
    /// Group entries by category, preserving first-seen category order and
    /// the original relative order of entries within each category.
    pub fn grouped_entries(&self) -> Vec<(&str, Vec<&str>)> {
        let mut grouped: Vec<(&str, Vec<&str>)> = Vec::new();

        for entry in &self.entries {
            match grouped.iter().position(|(cat, _)| *cat == entry.category) {
                Some(idx) => grouped[idx].1.push(entry.description.as_str()),
                None => grouped.push((entry.category.as_str(), vec![entry.description.as_str()])),
            }
        }

        grouped
    }
}
