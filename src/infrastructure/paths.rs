//! Path utilities for the Zellij sandbox environment.

use crate::domain::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Returns the plugin data directory.
///
/// Resolves to `/host/.local/share/zellij/movie-explorer` inside the sandbox.
/// `/host` points to the cwd of the last focused terminal, which is usually the
/// user's home directory. The trace export file lives here.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("movie-explorer")
}

/// Creates `dir` (and its parents) if missing and returns it.
///
/// # Errors
///
/// Returns [`crate::ExplorerError::Io`] if the directory cannot be created.
pub fn ensure_data_dir(dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    Ok(dir.to_path_buf())
}

/// Expands tilde paths to use the `/host` prefix for the Zellij sandbox.
///
/// # Examples
///
/// ```
/// use movie_explorer::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
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
