//! Extract the project version from a CMake-style build configuration.

use regex_lite::Regex;
use semver::Version;

use crate::error::VersionError;

/// Find the `VERSION x.y.z` argument of a `project(...)` call.
///
/// Case-insensitive and tolerant of the call spanning multiple lines.
pub fn extract_project_version(content: &str) -> Result<Version, VersionError> {
    let re = Regex::new(r"(?is)project\s*\([^)]*?VERSION\s+([0-9]+\.[0-9]+\.[0-9]+)").unwrap();

    let caps = re.captures(content).ok_or(VersionError::NotFound)?;
    let raw = caps[1].to_string();
    Version::parse(&raw).map_err(|e| VersionError::ParseFailed(raw, e))
}
