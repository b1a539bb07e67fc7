use crate::config::{Config, DEFAULT_EDITOR};
use crate::editor::EditorLauncher;
use crate::error::{DayError, Result};
use crate::vault_fs::{VaultEntry, VaultFs, WalkIter};
use chrono::NaiveDate;
use std::{
    cell::RefCell,
    collections::{BTreeMap, BTreeSet},
    io,
    path::{Path, PathBuf},
};

/// Test helper to create a default `Config` for testing purposes.
///
/// This is the single source of truth for test configuration.
/// If you add a field to `Config`, you only need to update it here.
pub fn mk_config(vault_dir: PathBuf, today: NaiveDate) -> Config {
    Config {
        vault_dir,
        today,
        editor: DEFAULT_EDITOR.to_string(),
    }
}

#[derive(Debug)]
enum Node {
    Dir,
    File(String),
}

/// In-memory vault. Paths are kept sorted, so walks are deterministic.
#[derive(Debug, Default)]
pub struct MemoryFs {
    nodes: RefCell<BTreeMap<PathBuf, Node>>,
    denied: RefCell<BTreeSet<PathBuf>>,
    read_only: RefCell<BTreeSet<PathBuf>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a directory and all its ancestors.
    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let mut nodes = self.nodes.borrow_mut();
        for dir in path.as_ref().ancestors() {
            if dir.as_os_str().is_empty() {
                continue;
            }
            nodes.entry(dir.to_path_buf()).or_insert(Node::Dir);
        }
    }

    /// Adds (or replaces) a file, creating its parent directories.
    pub fn add_file(&self, path: impl AsRef<Path>, contents: &str) {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        self.nodes
            .borrow_mut()
            .insert(path.to_path_buf(), Node::File(contents.to_string()));
    }

    /// Walking into `path` fails with permission denied.
    pub fn deny(&self, path: impl AsRef<Path>) {
        self.denied.borrow_mut().insert(path.as_ref().to_path_buf());
    }

    /// Creating `path` fails with permission denied.
    pub fn read_only(&self, path: impl AsRef<Path>) {
        self.read_only
            .borrow_mut()
            .insert(path.as_ref().to_path_buf());
    }

    pub fn read(&self, path: &Path) -> Option<String> {
        match self.nodes.borrow().get(path) {
            Some(Node::File(contents)) => Some(contents.clone()),
            _ => None,
        }
    }
}

fn denied(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::PermissionDenied,
        format!("{}: permission denied", path.display()),
    )
}

impl VaultFs for MemoryFs {
    fn walk<'a>(&'a self, root: &Path) -> WalkIter<'a> {
        let nodes = self.nodes.borrow();
        let denied_paths = self.denied.borrow();
        let mut items = Vec::new();

        if !nodes.contains_key(root) {
            items.push(Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{}: not found", root.display()),
            )));
            return Box::new(items.into_iter());
        }

        for (path, node) in nodes.range(root.to_path_buf()..) {
            if !path.starts_with(root) {
                break;
            }
            if denied_paths.contains(path) {
                items.push(Err(denied(path)));
                break;
            }
            items.push(Ok(VaultEntry {
                path: path.clone(),
                is_dir: matches!(node, Node::Dir),
            }));
        }
        Box::new(items.into_iter())
    }

    fn exists(&self, path: &Path) -> bool {
        self.nodes.borrow().contains_key(path)
    }

    fn create_new(&self, path: &Path, contents: &str) -> io::Result<bool> {
        if self.read_only.borrow().contains(path) || self.denied.borrow().contains(path) {
            return Err(denied(path));
        }
        let mut nodes = self.nodes.borrow_mut();
        if nodes.contains_key(path) {
            return Ok(false);
        }
        let parent_is_dir = path
            .parent()
            .is_some_and(|parent| matches!(nodes.get(parent), Some(Node::Dir)));
        if !parent_is_dir {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{}: no such directory", path.display()),
            ));
        }
        nodes.insert(path.to_path_buf(), Node::File(contents.to_string()));
        Ok(true)
    }
}

/// Records every launch instead of spawning a process.
#[derive(Debug, Default)]
pub struct RecordingEditor {
    calls: RefCell<Vec<(String, PathBuf)>>,
    fail: bool,
}

impl RecordingEditor {
    /// An editor that cannot be started.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<(String, PathBuf)> {
        self.calls.borrow().clone()
    }
}

impl EditorLauncher for RecordingEditor {
    fn launch(&self, editor: &str, path: &Path) -> Result<()> {
        if self.fail {
            return Err(DayError::EditorSpawn {
                editor: editor.to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "program not found"),
            });
        }
        self.calls
            .borrow_mut()
            .push((editor.to_string(), path.to_path_buf()));
        Ok(())
    }
}
