use clap::{Parser, error::ErrorKind};
use std::ffi::OsString;

/// day — open today's note in your Obsidian vault
///
/// Reads the vault root from OBSIDIAN_PATH, finds the folder that already holds
/// the most `YYYY-MM-DD.md` notes (the vault root if there are none), creates
/// today's note there if needed and opens it in nvim.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {}

impl Cli {
    pub fn new() -> Result<Self, clap::Error> {
        Self::from_args(std::env::args_os())
    }

    /// Parses `args`. `--help` and `--version` print and exit 0; any other parse
    /// error is returned so it ends the run like every other failure.
    pub fn from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Cli::try_parse_from(args) {
            Ok(cli) => Ok(cli),
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                e.exit()
            }
            Err(e) => Err(e),
        }
    }
}
