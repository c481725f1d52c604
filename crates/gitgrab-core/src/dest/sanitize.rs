//! URL path to clone destination.

use std::path::{Component, Path};

use super::clean::clean;
use super::error::PathError;

const GIT_SUFFIX: &str = ".git";

fn is_url_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Removes a single leading `/` or `\`.
///
/// URL paths carry exactly one leading separator; anything beyond that is
/// left for normalisation to deal with.
pub fn pre_trim(path: &str) -> &str {
    path.strip_prefix(is_url_separator).unwrap_or(path)
}

/// Removes a trailing `.git`, as `git clone` does when naming the directory.
///
/// Case-sensitive. A `.git` with no name in front of it (`.git`, `a/.git`)
/// is kept since stripping it would leave no directory name.
pub fn post_trim(path: &str) -> &str {
    match path.strip_suffix(GIT_SUFFIX) {
        Some(stem) if stem.chars().last().is_some_and(|c| !is_url_separator(c)) => stem,
        _ => path,
    }
}

/// Sanitizes `raw` against the current working directory.
///
/// See [`sanitize_in`].
pub fn sanitize(raw: &str) -> Result<String, PathError> {
    let cwd = std::env::current_dir().map_err(PathError::WorkDir)?;
    sanitize_in(raw, &cwd)
}

/// Converts a URL path into a relative destination inside `base`.
///
/// `/org/repo.git` becomes `org/repo`. The result never starts with a
/// separator, never holds a `..` segment, and joined onto `base` stays
/// inside it. Empty and separator-only paths become `"."`.
pub fn sanitize_in(raw: &str, base: &Path) -> Result<String, PathError> {
    let mut cleaned = clean(post_trim(pre_trim(raw)));
    // Normalisation can surface another leading `/` or `\`; each trim may in
    // turn expose a `.` segment, so clean again until none is left.
    while let Some(rest) = cleaned.strip_prefix(is_url_separator) {
        cleaned = clean(rest);
    }

    validate_relative(&cleaned, raw, base)?;
    Ok(cleaned)
}

/// Checks a normalised destination; `raw` is only used for error messages.
pub(super) fn validate_relative(cleaned: &str, raw: &str, base: &Path) -> Result<(), PathError> {
    let path = Path::new(cleaned);

    if path.components().any(|c| c == Component::ParentDir) {
        return Err(PathError::Traversal(raw.to_string()));
    }
    if path.is_absolute() || path.has_root() {
        return Err(PathError::Absolute(raw.to_string()));
    }

    let resolved = base.join(path);
    if !resolved.starts_with(base) {
        return Err(PathError::Escape {
            path: raw.to_string(),
            base: base.to_path_buf(),
        });
    }

    Ok(())
}
