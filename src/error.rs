//! Error types for pkgrel modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from changelog parsing.
///
/// Line numbers are 1-based. Validation errors reference the line where the
/// offending version record began, not where input ended.
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Line {line}: Missing date line for version {version}")]
    MissingDate { line: usize, version: String },

    #[error("Line {line}: Missing maintainer/email for version {version}")]
    MissingMaintainer { line: usize, version: String },

    #[error("Line {line}: Missing category for version {version}")]
    MissingCategory { line: usize, version: String },

    #[error("Line {line}: No entries for version {version}")]
    NoEntries { line: usize, version: String },

    #[error("Line {line}: Invalid maintainer/email format in line: {text}")]
    InvalidMaintainer { line: usize, text: String },

    #[error("Line {line}: Unsupported date format: {input}")]
    UnsupportedDateFormat { line: usize, input: String },
}

/// Errors from release stamping operations.
#[derive(Error, Debug)]
pub enum StampError {
    #[error("File not found: {0}")]
    MissingFile(PathBuf),

    #[error("Unable to read file: {0}")]
    Unreadable(#[source] std::io::Error),

    #[error("No _UNRELEASED_ entry found")]
    MissingMarker,

    #[error("Replacement failed (unexpected match count: {0})")]
    UnexpectedReplacementCount(usize),

    #[error("SOURCE_DATE_EPOCH is not a valid integer: {0}")]
    InvalidEpoch(String),

    #[error("Atomic write failed: {0}")]
    WriteFailed(#[source] std::io::Error),
}

/// Errors from project version extraction.
#[derive(Error, Debug)]
pub enum VersionError {
    #[error("No project version found")]
    NotFound,

    #[error("Failed to parse version '{0}': {1}")]
    ParseFailed(String, #[source] semver::Error),
}
