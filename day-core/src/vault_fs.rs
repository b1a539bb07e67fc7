//! Filesystem access used by the inferrer and the opener.
//!
//! [`VaultFs`] covers the three things `day` does to a vault: walk it, check whether
//! a note exists, and create a note that is absent. [`OsFs`] is the real disk.

use std::{
    fs::{self, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

/// One entry produced by [`VaultFs::walk`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultEntry {
    pub path: PathBuf,
    pub is_dir: bool,
}

pub type WalkIter<'a> = Box<dyn Iterator<Item = io::Result<VaultEntry>> + 'a>;

pub trait VaultFs {
    /// Every entry under `root`, `root` itself included, each visited once.
    /// Symlinks are reported as non-directory entries and are not followed.
    fn walk<'a>(&'a self, root: &Path) -> WalkIter<'a>;

    fn exists(&self, path: &Path) -> bool;

    /// Create `path` with `contents` only if it does not exist yet.
    /// Returns `Ok(false)` and leaves the file untouched when it already exists.
    fn create_new(&self, path: &Path, contents: &str) -> io::Result<bool>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct OsFs;

impl VaultFs for OsFs {
    fn walk<'a>(&'a self, root: &Path) -> WalkIter<'a> {
        Box::new(WalkDir::new(root).into_iter().map(|entry| {
            let entry = entry.map_err(io::Error::from)?;
            Ok(VaultEntry {
                is_dir: entry.file_type().is_dir(),
                path: entry.into_path(),
            })
        }))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_new(&self, path: &Path, contents: &str) -> io::Result<bool> {
        let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => return Ok(false),
            Err(e) => return Err(e),
        };
        write_or_remove(&mut file, path, contents)?;
        Ok(true)
    }
}

/// Writes `contents` into the just-created note at `path`. On failure the partial
/// file is removed so a later run creates it again with its header.
fn write_or_remove<W: Write>(file: &mut W, path: &Path, contents: &str) -> io::Result<()> {
    let written = file
        .write_all(contents.as_bytes())
        .and_then(|()| file.flush());
    if let Err(e) = written {
        let _ = fs::remove_file(path);
        return Err(e);
    }
    Ok(())
}
