use crate::error::Result;
use std::path::Path;

/// Hands a note over to an interactive editor and waits for it to exit.
pub trait EditorLauncher {
    fn launch(&self, editor: &str, path: &Path) -> Result<()>;
}
