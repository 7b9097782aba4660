use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures of the daily note operations.
///
/// A missing template is not an error: the note is created with a bare
/// date heading instead.
#[derive(Debug, Error)]
pub enum NoteError {
    #[error("Vault path does not exist: {}", path.display())]
    VaultNotFound { path: PathBuf },

    #[error("Daily note doesn't exist yet")]
    NoteNotCreated { path: PathBuf },

    #[error("Failed to {action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        source: io::Error,
    },

    #[error("Failed to open {} with the default application: {source}", path.display())]
    Launch { path: PathBuf, source: io::Error },
}

/// Build a mapper that tags an io::Error with what we were doing and where
pub(crate) fn io_error(action: &'static str, path: &Path) -> impl FnOnce(io::Error) -> NoteError {
    let path = path.to_path_buf();
    move |source| NoteError::Io {
        action,
        path,
        source,
    }
}
