//! RPM `%changelog` rendering.

use super::format::ReleaseRecord;

// Day-granular, locale-independent (chrono's %a/%b are always English).
const RPM_DATE_FORMAT: &str = "%a %b %d %Y";

/// Render records as an RPM `%changelog` section.
pub fn render_rpm(records: &[ReleaseRecord]) -> String {
    let mut output = String::from("%changelog\n");

    for record in records {
        let date = record.timestamp.format(RPM_DATE_FORMAT);
        output.push_str(&format!(
            "* {} {} <{}> - {}-1\n",
            date, record.maintainer, record.email, record.version
        ));

        for (category, items) in record.grouped_entries() {
            output.push_str(&format!("- {}\n", category));
            for item in items {
                output.push_str(&format!("  * {}\n", item));
            }
        }

        output.push('\n');
    }

    output
}
