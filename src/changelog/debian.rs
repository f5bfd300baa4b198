//! Debian `changelog` rendering.

use super::format::{ReleaseRecord, ReleaseStatus};

// chrono's %a/%b abbreviations are always English, which keeps the output
// stable regardless of the environment's locale.
const DEBIAN_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S %z";

/// Render records as a Debian changelog, most recent first as authored.
pub fn render_debian(records: &[ReleaseRecord], package: &str) -> String {
    let mut output = String::new();

    for record in records {
        let distribution = match record.status {
            ReleaseStatus::Unreleased => "UNRELEASED",
            ReleaseStatus::Released => "unstable",
        };
        output.push_str(&format!(
            "{} ({}-1) {}; urgency=medium\n",
            package, record.version, distribution
        ));

        for (category, items) in record.grouped_entries() {
            output.push_str(&format!("  * {}\n", category));
            for item in items {
                output.push_str(&format!("    - {}\n", item));
            }
        }

        let stamp = record.timestamp.format(DEBIAN_DATE_FORMAT);
        output.push_str(&format!(
            "\n -- {} <{}>  {}\n\n",
            record.maintainer, record.email, stamp
        ));
    }

    output
}
