use day_core::{DayError, EditorLauncher};
use std::{
    path::Path,
    process::{Command, Stdio},
};

/// Runs the editor on the invoking terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalEditor;

impl EditorLauncher for TerminalEditor {
    fn launch(&self, editor: &str, path: &Path) -> day_core::Result<()> {
        open_file_in_editor(editor, path)
    }
}

/// Spawns `editor_cmd` with `path` as its only argument, wired to this process's
/// stdin/stdout/stderr, and waits for it to exit.
pub fn open_file_in_editor(editor_cmd: &str, path: &Path) -> day_core::Result<()> {
    let status = Command::new(editor_cmd)
        .arg(path)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| DayError::EditorSpawn {
            editor: editor_cmd.to_string(),
            source,
        })?;
    if !status.success() {
        return Err(DayError::EditorStatus {
            editor: editor_cmd.to_string(),
            status,
        });
    }
    Ok(())
}
