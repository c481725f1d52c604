//! Per-URL failure type and its classification.

use std::fmt;
use std::time::Duration;

use crate::clone::CloneError;
use crate::dest::PathError;
use crate::git_url::GitUrlError;

/// Why processing one URL failed.
#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error(transparent)]
    Parse(#[from] GitUrlError),
    /// The parser reported neither a URL nor an error.
    #[error("url parse failed")]
    NoParseResult,
    #[error(transparent)]
    Path(#[from] PathError),
    #[error("destination already exists: {0}")]
    DestinationExists(String),
    #[error(transparent)]
    Clone(#[from] CloneError),
    /// The blocking clone task panicked or was cancelled.
    #[error("clone task failed: {0}")]
    CloneTask(#[from] tokio::task::JoinError),
    #[error("clone timeout after {}s", .0.as_secs())]
    Timeout(Duration),
}

/// Coarse classification reported per URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    ParseFailure,
    PathTraversal,
    AbsolutePath,
    PathEscape,
    DestinationExists,
    CloneFailure,
    CloneTimeout,
}

impl FailureKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FailureKind::ParseFailure => "parse_failure",
            FailureKind::PathTraversal => "path_traversal",
            FailureKind::AbsolutePath => "absolute_path",
            FailureKind::PathEscape => "path_escape",
            FailureKind::DestinationExists => "destination_exists",
            FailureKind::CloneFailure => "clone_failure",
            FailureKind::CloneTimeout => "clone_timeout",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ProcessError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ProcessError::Parse(_) | ProcessError::NoParseResult => FailureKind::ParseFailure,
            ProcessError::Path(PathError::Traversal(_)) => FailureKind::PathTraversal,
            ProcessError::Path(PathError::Absolute(_)) => FailureKind::AbsolutePath,
            // An unreadable working directory means containment cannot be shown.
            ProcessError::Path(PathError::Escape { .. } | PathError::WorkDir(_)) => {
                FailureKind::PathEscape
            }
            ProcessError::DestinationExists(_) => FailureKind::DestinationExists,
            ProcessError::Clone(_) | ProcessError::CloneTask(_) => FailureKind::CloneFailure,
            ProcessError::Timeout(_) => FailureKind::CloneTimeout,
        }
    }
}
