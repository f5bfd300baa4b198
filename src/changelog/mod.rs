//! Changelog parsing and packaging-format rendering.

pub mod debian;
pub mod format;
pub mod parser;
pub mod rpm;

pub use debian::render_debian;
pub use format::{ChangeEntry, ReleaseRecord, ReleaseStatus};
pub use parser::parse_changelog;
pub use rpm::render_rpm;
