//! `file:` URI handling for dropped files.

use std::path::PathBuf;

/// Project a `file:` URI to a local filesystem path.
///
/// Returns `None` for every other scheme. The scheme comparison is
/// case-insensitive, percent-escapes are decoded, and query or fragment
/// suffixes are dropped. A non-local authority is kept as a `//host/...` path.
pub fn local_file_path(uri: &str) -> Option<PathBuf> {
    let (scheme, rest) = uri.trim().split_once(':')?;
    if !scheme.eq_ignore_ascii_case("file") {
        return None;
    }

    let rest = rest.split(['?', '#']).next().unwrap_or_default();

    let path = match rest.strip_prefix("//") {
        Some(authority_and_path) => {
            let (authority, path) = match authority_and_path.find('/') {
                Some(index) => authority_and_path.split_at(index),
                None => (authority_and_path, ""),
            };
            if authority.is_empty() || authority.eq_ignore_ascii_case("localhost") {
                path.to_string()
            } else {
                format!("//{authority}{path}")
            }
        }
        None => rest.to_string(),
    };

    if path.is_empty() {
        return None;
    }

    match urlencoding::decode(&path) {
        Ok(decoded) => Some(PathBuf::from(decoded.as_ref())),
        Err(_) => Some(PathBuf::from(path)),
    }
}
