//! Line-oriented parser for the changelog document format.
//!
//! The document is a Markdown-like text: `# <version>` headers open a
//! record, an underscore-delimited date line carries the release date and
//! maintainer, `## <category>` headers group the `- <entry>` lines below
//! them. Unrecognized lines are ignored.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use regex_lite::Regex;
use tracing::debug;

use crate::error::ChangelogError;

use super::format::{ChangeEntry, ReleaseRecord, ReleaseStatus};

/// A version section that is still being scanned.
///
/// Categories and entries are accumulated at parser level, not here: lines
/// collected under an active category before the first version header
/// attach to the first record.
struct OpenRecord {
    version: String,
    /// 1-based line number of the `# <version>` header, for error messages.
    start_line: usize,
    date: Option<(ReleaseStatus, DateTime<FixedOffset>)>,
    maintainer: Option<(String, String)>,
}

impl OpenRecord {
    fn new(version: String, start_line: usize) -> Self {
        Self {
            version,
            start_line,
            date: None,
            maintainer: None,
        }
    }

    /// Validate and convert into a finished record.
    fn finalize(
        self,
        seen_category: bool,
        entries: Vec<ChangeEntry>,
    ) -> Result<ReleaseRecord, ChangelogError> {
        let Some((status, timestamp)) = self.date else {
            return Err(ChangelogError::MissingDate {
                line: self.start_line,
                version: self.version,
            });
        };
        let Some((maintainer, email)) = self.maintainer else {
            return Err(ChangelogError::MissingMaintainer {
                line: self.start_line,
                version: self.version,
            });
        };
        if !seen_category {
            return Err(ChangelogError::MissingCategory {
                line: self.start_line,
                version: self.version,
            });
        }
        if entries.is_empty() {
            return Err(ChangelogError::NoEntries {
                line: self.start_line,
                version: self.version,
            });
        }

        Ok(ReleaseRecord {
            version: self.version,
            status,
            timestamp,
            maintainer,
            email,
            entries,
        })
    }
}

/// Parse a full changelog document into release records, in source order.
///
/// The parse is all-or-nothing: the first invalid record aborts it and no
/// partial record list is returned.
pub fn parse_changelog(input: &str) -> Result<Vec<ReleaseRecord>, ChangelogError> {
    // Underscore-delimited date token, a comma, then the maintainer part.
    let release_re = Regex::new(r"^_([^_]+)_\s*,\s*(.+)$").unwrap();
    let maintainer_re = Regex::new(r"^(.+?)\s*<([^>]+)>").unwrap();

    let mut records = Vec::new();
    let mut open: Option<OpenRecord> = None;
    // Category context deliberately persists across version headers, and
    // category/entry state collected before the first header belongs to the
    // first record.
    let mut current_category: Option<String> = None;
    let mut seen_category = false;
    let mut entries: Vec<ChangeEntry> = Vec::new();

    for (idx, raw) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim_end();

        // Version header: single `#`. `## ` category headers do not match.
        if let Some(rest) = line.strip_prefix("# ") {
            // Category/entry state is reset only when closing a previous
            // record, never on the first header.
            if let Some(previous) = open.take() {
                records.push(previous.finalize(seen_category, std::mem::take(&mut entries))?);
                seen_category = false;
            }
            open = Some(OpenRecord::new(rest.trim().to_string(), line_no));
            continue;
        }

        // Release line: only meaningful while a record is open.
        if let Some(caps) = release_re.captures(line) {
            if let Some(record) = open.as_mut() {
                let date_token = caps[1].trim();
                let maintainer_part = &caps[2];

                let m = maintainer_re.captures(maintainer_part).ok_or_else(|| {
                    ChangelogError::InvalidMaintainer {
                        line: line_no,
                        text: line.to_string(),
                    }
                })?;
                record.maintainer = Some((m[1].trim().to_string(), m[2].trim().to_string()));

                record.date = Some(if date_token == "UNRELEASED" {
                    (ReleaseStatus::Unreleased, Utc::now().fixed_offset())
                } else {
                    let parsed = parse_date(date_token).ok_or_else(|| {
                        ChangelogError::UnsupportedDateFormat {
                            line: line_no,
                            input: date_token.to_string(),
                        }
                    })?;
                    (ReleaseStatus::Released, parsed)
                });
                continue;
            }
        }

        // Category header.
        if let Some(rest) = line.strip_prefix("## ") {
            current_category = Some(rest.trim().to_string());
            seen_category = true;
            continue;
        }

        // Entry line: silently dropped while no category is active.
        if let Some(rest) = line.strip_prefix("- ") {
            match current_category.as_ref() {
                Some(category) => entries.push(ChangeEntry {
                    category: category.clone(),
                    description: rest.trim().to_string(),
                }),
                None => debug!(line = line_no, "dropping entry line before any category"),
            }
            continue;
        }
    }

    if let Some(last) = open.take() {
        records.push(last.finalize(seen_category, entries)?);
    }

    debug!(count = records.len(), "parsed changelog records");
    Ok(records)
}

/// Parse a release date token, trying the supported formats in order.
///
/// Formats without an explicit offset are interpreted as UTC.
fn parse_date(token: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_str(token, "%Y-%m-%d %H:%M:%S %z") {
        return Some(dt);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(token, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc().fixed_offset());
    }
    if let Ok(date) = NaiveDate::parse_from_str(token, "%Y-%m-%d") {
        return Some(date.and_time(NaiveTime::MIN).and_utc().fixed_offset());
    }
    None
}
