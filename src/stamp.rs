//! Replace the `_UNRELEASED_` marker in a changelog with a release timestamp.
//!
//! The release time honors the reproducible-build convention: if
//! `SOURCE_DATE_EPOCH` is set it supplies the timestamp (interpreted as
//! UTC), otherwise the current local time is used.

use std::io::Write;
use std::path::Path;

use chrono::{Local, TimeZone, Utc};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::StampError;

/// The literal marker replaced on release.
pub const UNRELEASED_MARKER: &str = "_UNRELEASED_";

const SOURCE_DATE_EPOCH: &str = "SOURCE_DATE_EPOCH";
const HUMAN_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// The resolved release time: human-readable form plus unix epoch seconds.
#[derive(Debug, Clone)]
pub struct ReleaseTime {
    pub human: String,
    pub epoch: i64,
}

/// Resolve the release time from `SOURCE_DATE_EPOCH` or the local clock.
pub fn resolve_release_time() -> Result<ReleaseTime, StampError> {
    match std::env::var(SOURCE_DATE_EPOCH) {
        Ok(raw) => {
            let epoch: i64 = raw
                .trim()
                .parse()
                .map_err(|_| StampError::InvalidEpoch(raw.clone()))?;
            let timestamp = Utc
                .timestamp_opt(epoch, 0)
                .single()
                .ok_or(StampError::InvalidEpoch(raw))?;
            debug!(epoch, "using SOURCE_DATE_EPOCH release time");
            Ok(ReleaseTime {
                human: timestamp.format(HUMAN_FORMAT).to_string(),
                epoch,
            })
        }
        Err(_) => {
            let now = Local::now();
            Ok(ReleaseTime {
                human: now.format(HUMAN_FORMAT).to_string(),
                epoch: now.timestamp(),
            })
        }
    }
}

/// Stamp the first `_UNRELEASED_` occurrence in `path` with the release
/// timestamp and return the epoch seconds that were used.
///
/// In dry-run mode the file is left untouched. Otherwise the rewrite is
/// atomic: the new content goes to a temporary file in the same directory
/// which is then renamed over the target, so an interrupted run never
/// leaves a partially written changelog.
pub fn stamp_release(path: &Path, dry_run: bool) -> Result<i64, StampError> {
    if !path.exists() {
        return Err(StampError::MissingFile(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(StampError::Unreadable)?;

    if !content.contains(UNRELEASED_MARKER) {
        return Err(StampError::MissingMarker);
    }

    let release = resolve_release_time()?;
    let replacement = format!("_{}_", release.human);

    let before = content.matches(UNRELEASED_MARKER).count();
    let updated = content.replacen(UNRELEASED_MARKER, &replacement, 1);
    let replaced = before - updated.matches(UNRELEASED_MARKER).count();
    if replaced != 1 {
        return Err(StampError::UnexpectedReplacementCount(replaced));
    }

    if dry_run {
        return Ok(release.epoch);
    }

    write_atomic(path, &updated)?;
    Ok(release.epoch)
}

fn write_atomic(path: &Path, content: &str) -> Result<(), StampError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(StampError::WriteFailed)?;
    tmp.write_all(content.as_bytes())
        .map_err(StampError::WriteFailed)?;
    tmp.persist(path).map_err(|e| StampError::WriteFailed(e.error))?;
    Ok(())
}
