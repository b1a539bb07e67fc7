use crate::error::{DayError, Result};
use chrono::{Local, NaiveDate};
use std::{ffi::OsString, path::PathBuf};

/// Environment variable naming the vault root.
pub const VAULT_ENV: &str = "OBSIDIAN_PATH";

/// Editor launched on the daily note. Not configurable.
pub const DEFAULT_EDITOR: &str = "nvim";

#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the note vault, as given by `OBSIDIAN_PATH`. May be relative.
    pub vault_dir: PathBuf,
    /// Date the daily note is opened for.
    pub today: NaiveDate,
    /// Program that receives the note path as its only argument.
    pub editor: String,
}

impl Config {
    /// Public entrypoint: read the vault root from the process environment and
    /// take today's date from the local clock.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var_os(key), Local::now().date_naive())
    }

    /// Build a `Config` from an arbitrary variable lookup and a fixed date.
    ///
    /// An unset or empty `OBSIDIAN_PATH` is rejected with [`DayError::MissingVault`].
    pub fn from_lookup<F>(lookup: F, today: NaiveDate) -> Result<Self>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let vault_dir = lookup(VAULT_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .ok_or(DayError::MissingVault)?;

        Ok(Self {
            vault_dir,
            today,
            editor: DEFAULT_EDITOR.to_string(),
        })
    }
}
