//! Git URL model and parsing.
//!
//! Accepts the URL shapes the git client understands (scheme URLs, SCP-like
//! `user@host:path`, and local paths) and exposes a single structured view
//! so the processor can pick out the path and the logger can redact secrets.

mod parse;
mod redact;

pub use parse::parse_git_url;
pub use redact::{redact_url, INVALID_URL, PASSWORD_MASK};

/// Syntax the URL was written in; used to render it back faithfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlForm {
    /// `scheme://[user[:pass]@]host[:port]/path`
    Standard,
    /// `[user@]host:path`
    Scp,
    /// Plain filesystem path.
    Local,
}

/// Structured view of a git remote URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitUrl {
    pub scheme: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    /// Path component as written (may carry a leading separator and `.git`).
    pub path: String,
    pub query: Option<String>,
    pub fragment: Option<String>,
    pub form: UrlForm,
}

/// Why a string could not be read as a git URL.
#[derive(Debug, thiserror::Error)]
pub enum GitUrlError {
    #[error("empty URL")]
    Empty,
    #[error("invalid URL: {0}")]
    Invalid(#[from] url::ParseError),
    #[error("unsupported URL scheme: {0}")]
    UnsupportedScheme(String),
}

/// Swappable URL parsing capability.
///
/// `Ok(None)` means the parser produced nothing without reporting an error.
/// [`GitUrlParser`] never does that, but callers must treat it as a failure.
pub trait UrlParser: Send + Sync {
    fn parse(&self, raw: &str) -> Result<Option<GitUrl>, GitUrlError>;
}

/// Parser backed by [`parse_git_url`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GitUrlParser;

impl UrlParser for GitUrlParser {
    fn parse(&self, raw: &str) -> Result<Option<GitUrl>, GitUrlError> {
        parse_git_url(raw).map(Some)
    }
}
