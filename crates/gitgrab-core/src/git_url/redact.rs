//! Credential redaction for log output.

use std::fmt::Write as _;

use super::{parse_git_url, GitUrl, UrlForm};

/// Replaces the password component in logged URLs.
pub const PASSWORD_MASK: &str = "***";

/// Logged in place of a URL that does not parse.
pub const INVALID_URL: &str = "[invalid URL]";

/// Returns `raw` with any password masked, safe to write to logs.
///
/// Scheme, username, host, port, path, query and fragment are kept. A string
/// that is not a git URL yields [`INVALID_URL`] instead of an error.
pub fn redact_url(raw: &str) -> String {
    match parse_git_url(raw) {
        Ok(url) => url.redacted(),
        Err(_) => INVALID_URL.to_string(),
    }
}

impl GitUrl {
    /// Renders the URL in the syntax it was written in, password masked.
    pub fn redacted(&self) -> String {
        let mut out = String::new();
        match self.form {
            UrlForm::Local => out.push_str(&self.path),
            UrlForm::Scp => {
                if self.username.is_some() || self.password.is_some() {
                    out.push_str(self.username.as_deref().unwrap_or_default());
                    if self.password.is_some() {
                        out.push(':');
                        out.push_str(PASSWORD_MASK);
                    }
                    out.push('@');
                }
                out.push_str(self.host.as_deref().unwrap_or_default());
                out.push(':');
                out.push_str(&self.path);
            }
            UrlForm::Standard => {
                out.push_str(&self.scheme);
                out.push_str("://");
                if self.username.is_some() || self.password.is_some() {
                    out.push_str(self.username.as_deref().unwrap_or_default());
                    if self.password.is_some() {
                        out.push(':');
                        out.push_str(PASSWORD_MASK);
                    }
                    out.push('@');
                }
                out.push_str(self.host.as_deref().unwrap_or_default());
                if let Some(port) = self.port {
                    let _ = write!(out, ":{}", port);
                }
                out.push_str(&self.path);
                if let Some(query) = &self.query {
                    out.push('?');
                    out.push_str(query);
                }
                if let Some(fragment) = &self.fragment {
                    out.push('#');
                    out.push_str(fragment);
                }
            }
        }
        out
    }
}
