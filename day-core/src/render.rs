//! Markdown written into a freshly created daily note.
//!
//! Note header: `# 2023-10-06` followed by a blank line.

use chrono::NaiveDate;

/// `# 2023-10-06\n\n`
pub fn format_note_header(date: NaiveDate) -> String {
    format!("# {}\n\n", date.format("%Y-%m-%d"))
}
