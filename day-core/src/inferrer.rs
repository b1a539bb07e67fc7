//! Infers where a vault keeps its daily notes.
//!
//! The vault is walked once; every file named like `2023-10-06.md` counts one vote
//! for its parent directory and the directory with most votes wins.

use crate::error::{DayError, Result};
use crate::vault_fs::VaultFs;
use once_cell::sync::Lazy;
use regex::Regex;
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};
use tracing::{debug, trace};

static DAILY_NOTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}\.md$").expect("valid daily note regex"));

/// True when `name` is a bare daily note file name such as `2023-10-06.md`.
pub fn is_daily_note_name(name: &str) -> bool {
    DAILY_NOTE.is_match(name)
}

/// Count daily notes per containing directory.
///
/// The first traversal error aborts the scan; no partial counts are returned.
pub fn count_daily_notes(fs: &dyn VaultFs, root: &Path) -> Result<BTreeMap<PathBuf, usize>> {
    let mut counts = BTreeMap::new();

    for entry in fs.walk(root) {
        let entry = entry.map_err(|source| DayError::Walk {
            root: root.to_path_buf(),
            source,
        })?;
        if entry.is_dir {
            continue;
        }
        let matches = entry
            .path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(is_daily_note_name);
        if !matches {
            continue;
        }
        if let Some(parent) = entry.path.parent() {
            trace!(path = %entry.path.display(), "daily note");
            *counts.entry(parent.to_path_buf()).or_insert(0) += 1;
        }
    }

    Ok(counts)
}

/// The directory holding the most daily notes under `root`, or `None` if there are none.
///
/// Ties go to the directory whose path sorts first.
pub fn find_daily_notes_dir(fs: &dyn VaultFs, root: &Path) -> Result<Option<PathBuf>> {
    let counts = count_daily_notes(fs, root)?;

    let mut best: Option<(PathBuf, usize)> = None;
    for (dir, count) in counts {
        if best.as_ref().is_none_or(|(_, top)| count > *top) {
            best = Some((dir, count));
        }
    }

    match &best {
        Some((dir, count)) => debug!(dir = %dir.display(), count, "inferred daily notes directory"),
        None => debug!(root = %root.display(), "no daily notes found"),
    }
    Ok(best.map(|(dir, _)| dir))
}
