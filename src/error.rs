use std::io;
use std::path::Path;
use thiserror::Error;

/// Errors raised by the score processing operations.
///
/// All three kinds are fatal: a failed operation returns the error
/// alone, never partial results.
#[derive(Error, Debug)]
pub enum TallyError {
    /// Empty path argument, or a named file that could not be opened.
    #[error("file error: {0}")]
    FileIo(String),

    /// A token contained a character outside A-Z / a-z.
    #[error("illegal character in token {position}: {text:?}")]
    IllegalCharacter { position: usize, text: String },

    /// Any other I/O failure while reading or writing.
    #[error("I/O error: {0}")]
    Other(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, TallyError>;

/// Classify a failed open: missing or inaccessible files are file
/// errors, anything else keeps its I/O identity.
pub(crate) fn open_error(path: &Path, err: io::Error) -> TallyError {
    match err.kind() {
        io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => {
            TallyError::FileIo(format!("{}: {}", path.display(), err))
        }
        _ => TallyError::Other(err),
    }
}
