use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// `2023-10-06.md`
pub fn note_file_name(date: NaiveDate) -> String {
    format!("{}.md", date.format("%Y-%m-%d"))
}

pub fn note_path(dir: &Path, date: NaiveDate) -> PathBuf {
    dir.join(note_file_name(date))
}
