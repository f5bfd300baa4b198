//! Integration tests for changelog parsing and rendering.

mod common;

use pkgrel::changelog::{parse_changelog, render_debian, render_rpm, ReleaseStatus};
use pkgrel::error::ChangelogError;

#[test]
fn test_parse_release_fixture() {
    let content = common::read_fixture(common::changelog_fixture("release.md"));
    let records = parse_changelog(&content).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].version, "2.1.0");
    assert_eq!(records[1].version, "2.0.0");
    assert!(records.iter().all(|r| r.status == ReleaseStatus::Released));
}

#[test]
fn test_debian_output_for_release_fixture() {
    let content = common::read_fixture(common::changelog_fixture("release.md"));
    let records = parse_changelog(&content).unwrap();
    let output = render_debian(&records, "tcppump");

    let expected = "\
tcppump (2.1.0-1) unstable; urgency=medium
  * Added
    - Pcap replay mode
    - VLAN tagging support
  * Fixed
    - Checksum calculation for padded frames

 -- Maria Lang <maria@example.net>  Sat, 02 Mar 2024 18:30:00 +0200

tcppump (2.0.0-1) unstable; urgency=medium
  * Changed
    - Rewrote the packet compiler

 -- Maria Lang <maria@example.net>  Mon, 20 Nov 2023 00:00:00 +0000

";
    assert_eq!(output, expected);
}

#[test]
fn test_rpm_output_for_release_fixture() {
    let content = common::read_fixture(common::changelog_fixture("release.md"));
    let records = parse_changelog(&content).unwrap();
    let output = render_rpm(&records);

    let expected = "\
%changelog
* Sat Mar 02 2024 Maria Lang <maria@example.net> - 2.1.0-1
- Added
  * Pcap replay mode
  * VLAN tagging support
- Fixed
  * Checksum calculation for padded frames

* Mon Nov 20 2023 Maria Lang <maria@example.net> - 2.0.0-1
- Changed
  * Rewrote the packet compiler

";
    assert_eq!(output, expected);
}

#[test]
fn test_unreleased_fixture_renders_unreleased_distribution() {
    let content = common::read_fixture(common::changelog_fixture("unreleased.md"));
    let records = parse_changelog(&content).unwrap();

    assert_eq!(records[0].status, ReleaseStatus::Unreleased);

    let output = render_debian(&records, "tcppump");
    assert!(output.starts_with("tcppump (2.2.0-1) UNRELEASED; urgency=medium\n"));
    // UNRELEASED timestamps are captured at parse time in UTC.
    assert!(output.contains("+0000\n"));
}

#[test]
fn test_record_without_date_line_fails_whole_parse() {
    let content = common::read_fixture(common::changelog_fixture("missing_date.md"));
    let err = parse_changelog(&content).unwrap_err();

    match err {
        ChangelogError::MissingDate { line, version } => {
            assert_eq!(line, 1);
            assert_eq!(version, "2.1.0");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_single_version_with_two_categories() {
    let input = "\
# 1.2.0
_2024-01-15 10:00:00 +0100_, Jane Doe <jane@example.org>
## Fixed
- Fixed crash on startup
## Added
- New export option
";
    let records = parse_changelog(input).unwrap();
    let output = render_debian(&records, "tcppump");

    assert!(output.starts_with("tcppump (1.2.0-1) unstable; urgency=medium\n"));
    assert!(output.contains("  * Fixed\n    - Fixed crash on startup\n"));
    assert!(output.contains("  * Added\n    - New export option\n"));
    assert!(output.contains(" -- Jane Doe <jane@example.org>  Mon, 15 Jan 2024 10:00:00 +0100\n"));
}
