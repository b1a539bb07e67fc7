pub mod config;
pub mod editor;
pub mod error;
pub mod inferrer;
pub mod paths;
pub mod render;
pub mod vault;
pub mod vault_fs;


pub use config::Config;
pub use editor::EditorLauncher;
pub use error::{DayError, Result};
pub use inferrer::{count_daily_notes, find_daily_notes_dir};
pub use vault::{OpenedNote, Vault};
pub use vault_fs::{OsFs, VaultEntry, VaultFs};
