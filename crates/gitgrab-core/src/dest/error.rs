//! Error type for destination sanitizing.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PathError {
    /// A `..` segment survived normalisation.
    #[error("path traversal detected in: {0}")]
    Traversal(String),
    #[error("absolute paths not allowed: {0}")]
    Absolute(String),
    /// Joined with the working directory, the path lands outside it.
    #[error("path escapes working directory: {path} (base {})", base.display())]
    Escape { path: String, base: PathBuf },
    #[error("cannot get working directory: {0}")]
    WorkDir(#[source] std::io::Error),
}
