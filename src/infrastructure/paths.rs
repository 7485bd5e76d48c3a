//! Path manipulation utilities for the Zellij sandbox environment.
//!
//! This module provides functions for working with filesystem paths in the
//! Zellij plugin sandbox, where the host filesystem is mounted under `/host`.
//! It handles tilde expansion, host prefix stripping, and the storage
//! location for persisted data.

use std::path::PathBuf;

/// Returns the data directory for Zevility storage.
///
/// The directory is located at `/host/.local/share/zellij/zevility` in the
/// Zellij sandbox. In Zellij's plugin environment, `/host` points to the cwd
/// of the last focused terminal, or the folder where Zellij was started if
/// that's not available; when Zellij is started from the home directory this
/// resolves to `~/.local/share/zellij/zevility`. The preference/build file
/// `zevility.json` lives inside this directory.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("zevility")
}

/// Expands tilde paths to use the `/host` prefix for the Zellij sandbox.
///
/// In the sandbox environment the host's home directory (`~`) maps to
/// `/host`. This function converts tilde-prefixed paths (such as the
/// configured `data_path`) to their sandbox equivalents.
///
/// # Examples
///
/// ```
/// use zevility::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/evilities.json"), "/host/evilities.json");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

/// Strips the `/host` sandbox prefix from a path, if present.
///
/// Useful when displaying paths back to the user in host terms.
///
/// # Examples
///
/// ```
/// use zevility::infrastructure::strip_host_prefix;
///
/// assert_eq!(strip_host_prefix("/host/evilities.json"), "/evilities.json");
/// assert_eq!(strip_host_prefix("/other/path"), "/other/path");
/// ```
#[must_use]
pub fn strip_host_prefix(path: &str) -> String {
    path.strip_prefix("/host").map_or_else(
        || path.to_string(),
        |stripped| {
            if stripped.is_empty() {
                "/".to_string()
            } else {
                stripped.to_string()
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_expansion() {
        assert_eq!(expand_tilde("~/data/ev.json"), "/host/data/ev.json");
        assert_eq!(expand_tilde("~"), "/host");
        assert_eq!(expand_tilde("/abs"), "/abs");
        assert_eq!(expand_tilde("relative/path"), "relative/path");
    }

    #[test]
    fn host_prefix_stripping() {
        assert_eq!(strip_host_prefix("/host/a/b"), "/a/b");
        assert_eq!(strip_host_prefix("/host"), "/");
        assert_eq!(strip_host_prefix("/elsewhere"), "/elsewhere");
    }
}
