//! The `Vault` struct: opens today's daily note.
use crate::config::Config;
use crate::editor::EditorLauncher;
use crate::error::{DayError, Result};
use crate::inferrer::find_daily_notes_dir;
use crate::paths::note_path;
use crate::render::format_note_header;
use crate::vault_fs::VaultFs;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug)]
pub struct Vault {
    pub config: Config,
}

/// What [`Vault::open_today`] did before handing the note to the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenedNote {
    pub path: PathBuf,
    /// The note did not exist and was written with its header.
    pub created: bool,
    /// The note lives in an inferred daily notes directory rather than the vault root.
    pub inferred: bool,
}

impl Vault {
    pub fn new() -> Result<Self> {
        Ok(Self::with_config(Config::from_env()?))
    }

    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Where today's note goes: the inferred daily notes directory, or the vault root.
    ///
    /// Returns the note path and whether the directory was inferred.
    pub fn today_path(&self, fs: &dyn VaultFs) -> Result<(PathBuf, bool)> {
        let root = &self.config.vault_dir;
        let (dir, inferred) = match find_daily_notes_dir(fs, root)? {
            Some(dir) => (dir, true),
            None => {
                debug!(root = %root.display(), "falling back to vault root");
                (root.clone(), false)
            }
        };
        Ok((note_path(&dir, self.config.today), inferred))
    }

    /// Ensures today's note exists, then opens it in the editor and blocks until it exits.
    ///
    /// Steps run in order and the first failure ends the whole operation. The note is
    /// fully written before the editor starts.
    pub fn open_today(&self, fs: &dyn VaultFs, editor: &dyn EditorLauncher) -> Result<OpenedNote> {
        let (path, inferred) = self.today_path(fs)?;
        let created = ensure_note(fs, &path, self.config.today)?;

        debug!(editor = %self.config.editor, path = %path.display(), "launching editor");
        editor.launch(&self.config.editor, &path)?;

        Ok(OpenedNote {
            path,
            created,
            inferred,
        })
    }
}

/// Creates the note at `path` with its heading if absent. An existing note is never touched.
///
/// Returns whether the note was created.
pub fn ensure_note(fs: &dyn VaultFs, path: &Path, date: NaiveDate) -> Result<bool> {
    if fs.exists(path) {
        debug!(path = %path.display(), "note already exists");
        return Ok(false);
    }

    let created = fs
        .create_new(path, &format_note_header(date))
        .map_err(|source| DayError::CreateNote {
            path: path.to_path_buf(),
            source,
        })?;
    if created {
        info!(path = %path.display(), "created note");
    }
    Ok(created)
}
