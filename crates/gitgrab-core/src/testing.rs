//! Programmable parser and cloner doubles for unit tests.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;

use crate::clone::{CloneError, CloneOptions, Cloner};
use crate::git_url::{GitUrl, GitUrlError, UrlForm, UrlParser};

type ParseFn = dyn Fn(&str) -> Result<Option<GitUrl>, GitUrlError> + Send + Sync;
type CloneFn = dyn Fn(&Path, &str) -> Result<(), CloneError> + Send + Sync;

/// `https://example.com{path}` with nothing else set.
pub(crate) fn url_with_path(path: &str) -> GitUrl {
    GitUrl {
        scheme: "https".to_string(),
        username: None,
        password: None,
        host: Some("example.com".to_string()),
        port: None,
        path: path.to_string(),
        query: None,
        fragment: None,
        form: UrlForm::Standard,
    }
}

pub(crate) struct MockParser(Box<ParseFn>);

impl MockParser {
    pub(crate) fn new(
        f: impl Fn(&str) -> Result<Option<GitUrl>, GitUrlError> + Send + Sync + 'static,
    ) -> Self {
        Self(Box::new(f))
    }

    /// Always returns a URL whose path is `path`.
    pub(crate) fn with_path(path: &'static str) -> Self {
        Self::new(move |_| Ok(Some(url_with_path(path))))
    }
}

impl UrlParser for MockParser {
    fn parse(&self, raw: &str) -> Result<Option<GitUrl>, GitUrlError> {
        (self.0)(raw)
    }
}

/// One recorded `clone_repo` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CloneCall {
    pub(crate) dest: PathBuf,
    pub(crate) url: String,
    pub(crate) opts: CloneOptions,
}

pub(crate) struct MockCloner {
    behavior: Box<CloneFn>,
    calls: Mutex<Vec<CloneCall>>,
}

impl MockCloner {
    pub(crate) fn new(
        f: impl Fn(&Path, &str) -> Result<(), CloneError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            behavior: Box::new(f),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn succeeding() -> Self {
        Self::new(|_, _| Ok(()))
    }

    pub(crate) fn failing(msg: &'static str) -> Self {
        Self::new(move |_, _| Err(CloneError::Other(msg.to_string())))
    }

    pub(crate) fn calls(&self) -> Vec<CloneCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl Cloner for MockCloner {
    fn clone_repo(&self, dest: &Path, url: &str, opts: &CloneOptions) -> Result<(), CloneError> {
        self.calls.lock().unwrap().push(CloneCall {
            dest: dest.to_path_buf(),
            url: url.to_string(),
            opts: *opts,
        });
        (self.behavior)(dest, url)
    }
}

/// In-memory log sink for asserting on what was written.
#[derive(Clone, Default)]
pub(crate) struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub(crate) fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Routes this thread's events to a buffer until the guard drops.
pub(crate) fn capture_logs() -> (CapturedLogs, tracing::subscriber::DefaultGuard) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::TRACE)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (logs, guard)
}
