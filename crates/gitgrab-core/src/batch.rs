//! Sequential processing of a list of URLs.

use std::sync::Arc;

use crate::clone::Cloner;
use crate::git_url::UrlParser;
use crate::process::{process_url, ProcessSettings};

/// Tally of one run over the command-line URLs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub succeeded: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }

    /// `0` when every URL succeeded, `1` otherwise (the count is in the logs).
    pub fn exit_code(&self) -> i32 {
        if self.failed > 0 {
            1
        } else {
            0
        }
    }
}

/// Processes each URL in order, one clone at a time.
///
/// A failure is counted and the run moves on to the next URL.
pub async fn run_urls<S: AsRef<str>>(
    urls: &[S],
    parser: &dyn UrlParser,
    cloner: Arc<dyn Cloner>,
    settings: &ProcessSettings,
) -> RunSummary {
    let mut summary = RunSummary::default();
    for raw in urls {
        match process_url(raw.as_ref(), parser, Arc::clone(&cloner), settings).await {
            Ok(_) => summary.succeeded += 1,
            Err(_) => summary.failed += 1,
        }
    }
    tracing::debug!(
        succeeded = summary.succeeded,
        failed = summary.failed,
        "run finished"
    );
    summary
}
