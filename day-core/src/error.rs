//! Error types for `day`.
//!
//! Every variant is terminal: the CLI prints it and exits with status 1.

use std::{io, path::PathBuf, process::ExitStatus};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DayError>;

#[derive(Debug, Error)]
pub enum DayError {
    #[error("please set the OBSIDIAN_PATH environment variable")]
    MissingVault,

    #[error("error finding daily notes directory under {}: {source}", .root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error creating note {}: {source}", .path.display())]
    CreateNote {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error opening note in {editor}: {source}")]
    EditorSpawn {
        editor: String,
        #[source]
        source: io::Error,
    },

    #[error("{editor} exited with {status}")]
    EditorStatus { editor: String, status: ExitStatus },
}
