//! pkgrel - release-engineering helpers for packaging changelogs.
//!
//! # Overview
//!
//! pkgrel parses a structured Markdown-like changelog document and re-emits
//! it in Debian `changelog` or RPM `%changelog` format, stamps an
//! `_UNRELEASED_` marker with a release timestamp, and extracts the project
//! version from a build-configuration file.

pub mod changelog;
pub mod error;
pub mod stamp;
pub mod version;

// Re-export commonly used types
pub use changelog::{ChangeEntry, ReleaseRecord, ReleaseStatus};
pub use error::{ChangelogError, StampError, VersionError};

/// Route tracing diagnostics to stderr, filtered by `RUST_LOG`.
///
/// Stdout stays reserved for the tools' machine-consumable output. Safe to
/// call more than once; later calls are no-ops.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}
