//! libgit2 clone backend.

use std::fs;
use std::io::Write;
use std::path::Path;

use git2::build::RepoBuilder;
use git2::{Cred, CredentialType, FetchOptions, Progress, RemoteCallbacks};

use super::{CloneError, CloneOptions, Cloner, ProgressSink};
use crate::git_url::parse_git_url;

/// libgit2 keeps asking while credentials are rejected; give up after this many.
const MAX_CREDENTIAL_ATTEMPTS: u32 = 3;

/// Clones over any transport libgit2 supports (https, ssh, git, file).
#[derive(Debug, Clone, Copy, Default)]
pub struct Git2Cloner;

impl Cloner for Git2Cloner {
    fn clone_repo(&self, dest: &Path, url: &str, opts: &CloneOptions) -> Result<(), CloneError> {
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(|source| CloneError::CreateParent {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let mut callbacks = RemoteCallbacks::new();
        let mut attempts = 0u32;
        let from_url = url_credentials(url);
        callbacks.credentials(move |url, username, allowed| {
            attempts += 1;
            let source = pick_credential(username, allowed, from_url.as_ref(), attempts);
            source.into_cred(url, username)
        });

        let show_progress = opts.progress == ProgressSink::Stderr;
        if show_progress {
            let mut last_pct = None;
            callbacks.transfer_progress(move |stats| {
                report_progress(&stats, &mut last_pct);
                true
            });
        }

        let mut fetch = FetchOptions::new();
        fetch.remote_callbacks(callbacks);
        if let Some(depth) = fetch_depth(url, opts.depth) {
            fetch.depth(depth);
        }

        let result = RepoBuilder::new().fetch_options(fetch).clone(url, dest);
        if show_progress {
            eprintln!();
        }
        result?;
        Ok(())
    }
}

/// Depth to request, or `None` for full history.
///
/// libgit2's local transport refuses shallow fetches, so `file` sources
/// always get everything.
fn fetch_depth(url: &str, depth: u32) -> Option<i32> {
    if depth == 0 || is_local_source(url) {
        if depth > 0 {
            tracing::debug!(depth, "local source, fetching full history");
        }
        return None;
    }
    Some(i32::try_from(depth).unwrap_or(i32::MAX))
}

fn is_local_source(url: &str) -> bool {
    parse_git_url(url).is_ok_and(|u| u.scheme == "file")
}

/// User and password embedded in the clone URL, percent-decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
struct UrlCredentials {
    user: String,
    password: String,
}

fn url_credentials(url: &str) -> Option<UrlCredentials> {
    let parsed = parse_git_url(url).ok()?;
    let password = parsed.password?;
    let decode = |s: &str| {
        urlencoding::decode(s)
            .map(|d| d.into_owned())
            .unwrap_or_else(|_| s.to_string())
    };
    Some(UrlCredentials {
        user: decode(parsed.username.as_deref().unwrap_or_default()),
        password: decode(&password),
    })
}

/// What to answer a credential request with.
#[derive(Debug, Clone, PartialEq, Eq)]
enum CredentialSource {
    Username(String),
    UserPass(UrlCredentials),
    SshAgent(String),
    Helper,
    Default,
    GiveUp,
}

/// URL user/password first, then the SSH agent, then the credential helper.
fn pick_credential(
    username: Option<&str>,
    allowed: CredentialType,
    from_url: Option<&UrlCredentials>,
    attempt: u32,
) -> CredentialSource {
    if attempt > MAX_CREDENTIAL_ATTEMPTS {
        return CredentialSource::GiveUp;
    }
    let user = username.unwrap_or("git").to_string();

    if allowed.contains(CredentialType::USERNAME) {
        return CredentialSource::Username(user);
    }
    if allowed.contains(CredentialType::USER_PASS_PLAINTEXT) {
        if let Some(creds) = from_url {
            return CredentialSource::UserPass(creds.clone());
        }
    }
    if allowed.contains(CredentialType::SSH_KEY) {
        return CredentialSource::SshAgent(user);
    }
    if allowed.contains(CredentialType::USER_PASS_PLAINTEXT) {
        return CredentialSource::Helper;
    }
    CredentialSource::Default
}

impl CredentialSource {
    fn into_cred(self, url: &str, username: Option<&str>) -> Result<Cred, git2::Error> {
        match self {
            CredentialSource::Username(user) => Cred::username(&user),
            CredentialSource::UserPass(creds) => {
                Cred::userpass_plaintext(&creds.user, &creds.password)
            }
            CredentialSource::SshAgent(user) => Cred::ssh_key_from_agent(&user),
            CredentialSource::Helper => {
                let config = git2::Config::open_default()?;
                Cred::credential_helper(&config, url, username)
            }
            CredentialSource::Default => Cred::default(),
            CredentialSource::GiveUp => Err(git2::Error::from_str("authentication failed")),
        }
    }
}

/// Prints `Receiving objects` lines, only when the percentage moves.
fn report_progress(stats: &Progress<'_>, last_pct: &mut Option<usize>) {
    let total = stats.total_objects();
    if total == 0 {
        return;
    }
    let received = stats.received_objects();
    let pct = received * 100 / total;
    if *last_pct == Some(pct) {
        return;
    }
    *last_pct = Some(pct);

    let kib = stats.received_bytes() / 1024;
    let mut err = std::io::stderr().lock();
    let _ = write!(
        err,
        "\rReceiving objects: {:3}% ({}/{}), {} KiB",
        pct, received, total, kib
    );
    let _ = err.flush();
}
