//! Single-URL pipeline: parse, derive destination, check, clone with a deadline.

mod error;

pub use error::{FailureKind, ProcessError};

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::clone::{CloneError, CloneOptions, Cloner, ProgressSink, DEFAULT_DEPTH};
use crate::config::GrabConfig;
use crate::dest;
use crate::git_url::{redact_url, UrlParser};

/// How long to wait for one clone before giving up on it.
pub const CLONE_TIMEOUT: Duration = Duration::from_secs(5 * 60);

/// Knobs for [`process_url`].
#[derive(Debug, Clone)]
pub struct ProcessSettings {
    /// Destinations are resolved under, and must stay inside, this directory.
    pub work_dir: PathBuf,
    pub clone_timeout: Duration,
    pub depth: u32,
    pub progress: ProgressSink,
}

impl ProcessSettings {
    pub fn new(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: work_dir.into(),
            clone_timeout: CLONE_TIMEOUT,
            depth: DEFAULT_DEPTH,
            progress: ProgressSink::Stderr,
        }
    }

    pub fn from_config(work_dir: impl Into<PathBuf>, cfg: &GrabConfig) -> Self {
        Self {
            work_dir: work_dir.into(),
            clone_timeout: Duration::from_secs(cfg.clone_timeout_secs),
            depth: cfg.depth,
            progress: if cfg.show_progress {
                ProgressSink::Stderr
            } else {
                ProgressSink::Silent
            },
        }
    }

    fn clone_options(&self) -> CloneOptions {
        CloneOptions {
            depth: self.depth,
            progress: self.progress,
        }
    }
}

/// Clones one repository URL into a directory named after its path.
///
/// Returns the destination on success. Every failure is logged once here
/// with the redacted URL, then returned. If the deadline passes, the clone
/// keeps running on its blocking thread; only the wait is abandoned.
pub async fn process_url(
    raw: &str,
    parser: &dyn UrlParser,
    cloner: Arc<dyn Cloner>,
    settings: &ProcessSettings,
) -> Result<PathBuf, ProcessError> {
    let url = redact_url(raw);
    tracing::info!(url = %url, "processing");

    let parsed = match parser.parse(raw) {
        Ok(Some(parsed)) => parsed,
        Ok(None) => {
            let err = ProcessError::NoParseResult;
            tracing::error!(kind = %err.kind(), url = %url, "url parse returned nothing");
            return Err(err);
        }
        Err(e) => {
            let err = ProcessError::from(e);
            tracing::error!(kind = %err.kind(), error = %err, url = %url, "cannot parse");
            return Err(err);
        }
    };

    let rel = match dest::sanitize_in(&parsed.path, &settings.work_dir) {
        Ok(rel) => rel,
        Err(e) => {
            let err = ProcessError::from(e);
            tracing::error!(
                kind = %err.kind(),
                error = %err,
                url = %url,
                path = %parsed.path,
                "invalid path"
            );
            return Err(err);
        }
    };
    let target = settings.work_dir.join(&rel);

    // symlink_metadata so a dangling link still counts as taken.
    if fs::symlink_metadata(&target).is_ok() {
        let err = ProcessError::DestinationExists(rel);
        tracing::error!(
            kind = %err.kind(),
            error = %err,
            url = %url,
            dest = %target.display(),
            "cannot clone"
        );
        return Err(err);
    }

    tracing::info!(url = %url, dest = %rel, "cloning repo");

    match clone_with_deadline(cloner, &target, raw, settings).await {
        Ok(()) => {
            tracing::info!(url = %url, dest = %rel, "cloned repo");
            Ok(target)
        }
        Err(err) => {
            tracing::error!(
                kind = %err.kind(),
                error = %err,
                url = %url,
                dest = %rel,
                "cannot clone repo"
            );
            Err(err)
        }
    }
}

/// Runs the clone on the blocking pool and races it against the timeout.
async fn clone_with_deadline(
    cloner: Arc<dyn Cloner>,
    target: &Path,
    raw: &str,
    settings: &ProcessSettings,
) -> Result<(), ProcessError> {
    let opts = settings.clone_options();
    let task = tokio::task::spawn_blocking({
        let target = target.to_path_buf();
        let raw = raw.to_string();
        move || cloner.clone_repo(&target, &raw, &opts)
    });

    match tokio::time::timeout(settings.clone_timeout, task).await {
        Ok(joined) => {
            let cloned: Result<(), CloneError> = joined?;
            cloned?;
            Ok(())
        }
        Err(_) => Err(ProcessError::Timeout(settings.clone_timeout)),
    }
}
