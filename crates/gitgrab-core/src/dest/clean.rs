//! Lexical path normalisation (no filesystem access).

use std::path::{is_separator, MAIN_SEPARATOR, MAIN_SEPARATOR_STR};

/// Returns the shortest equivalent form of `path`.
///
/// Repeated separators collapse, `.` segments drop out, and `..` removes the
/// preceding normal segment. A `..` with nothing to remove is kept in a
/// relative path and dropped at the root. An empty result is `"."`.
pub fn clean(path: &str) -> String {
    let rooted = path.starts_with(is_separator);
    let mut parts: Vec<&str> = Vec::new();

    for segment in path.split(is_separator) {
        match segment {
            "" | "." => {}
            ".." => {
                if parts.last().is_some_and(|last| *last != "..") {
                    parts.pop();
                } else if !rooted {
                    parts.push("..");
                }
            }
            other => parts.push(other),
        }
    }

    let body = parts.join(MAIN_SEPARATOR_STR);
    match (rooted, body.is_empty()) {
        (true, _) => format!("{}{}", MAIN_SEPARATOR, body),
        (false, true) => ".".to_string(),
        (false, false) => body,
    }
}
