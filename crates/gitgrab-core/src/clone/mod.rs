//! Repository cloning capability.
//!
//! The processor only sees the [`Cloner`] trait so tests can swap in a double;
//! [`Git2Cloner`] is the real libgit2 backend.

mod libgit2;

pub use libgit2::Git2Cloner;

use std::path::Path;

/// Depth used unless configured otherwise (latest commit only).
pub const DEFAULT_DEPTH: u32 = 1;

/// Where transfer progress goes while cloning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProgressSink {
    #[default]
    Stderr,
    Silent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloneOptions {
    /// History depth; `0` fetches everything.
    pub depth: u32,
    pub progress: ProgressSink,
}

impl Default for CloneOptions {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            progress: ProgressSink::default(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CloneError {
    #[error(transparent)]
    Git(#[from] git2::Error),
    #[error("cannot create parent directory {}: {source}", path.display())]
    CreateParent {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{0}")]
    Other(String),
}

/// Clones `url` into `dest`. Blocking; callers run it off the async runtime.
///
/// There is no cancellation hook: once started, a clone runs to completion
/// or failure.
pub trait Cloner: Send + Sync {
    fn clone_repo(&self, dest: &Path, url: &str, opts: &CloneOptions) -> Result<(), CloneError>;
}
