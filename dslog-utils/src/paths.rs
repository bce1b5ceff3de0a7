//! Path utilities for dslog
//!
//! Log files live under `~/.<app>/Logs/`. Only the optional config file
//! follows the XDG layout.

use std::path::{Path, PathBuf};

use directories::{BaseDirs, ProjectDirs};

use crate::{DslogError, Result};

/// Application identifier for XDG directories
const APP_NAME: &str = "dslog";

/// Extension shared by every persistent log file
pub const LOGS_EXTENSION: &str = "qdslog";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", APP_NAME)
}

/// Get the user's home directory
///
/// Falls back to `$HOME`, then to the temporary directory.
pub fn home_dir() -> PathBuf {
    BaseDirs::new()
        .map(|b| b.home_dir().to_path_buf())
        .or_else(|| std::env::var_os("HOME").map(PathBuf::from))
        .unwrap_or_else(std::env::temp_dir)
}

/// Log directory for `app_name` under `home`, without touching the filesystem
///
/// Location: `<home>/.<app_name lowercased>/Logs`
pub fn logs_dir_in(home: &Path, app_name: &str) -> PathBuf {
    home.join(format!(".{}", app_name.to_lowercase())).join("Logs")
}

/// Get the log directory, creating it if necessary
///
/// Location: `~/.<app_name lowercased>/Logs`
pub fn logs_dir(app_name: &str) -> Result<PathBuf> {
    ensure_dir(&logs_dir_in(&home_dir(), app_name))
}

/// Get the mirror file path
///
/// Location: `$TMPDIR/<app_name>.log`. The name is the same for every run so
/// the mirror only ever holds the latest session.
pub fn mirror_path(app_name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("{}.log", app_name))
}

/// Get the configuration directory
///
/// Location: `$XDG_CONFIG_HOME/dslog` or `~/.config/dslog`
pub fn config_dir() -> PathBuf {
    project_dirs()
        .map(|p| p.config_dir().to_path_buf())
        .unwrap_or_else(|| home_dir().join(".config").join(APP_NAME))
}

/// Get the main configuration file path
///
/// Location: `$XDG_CONFIG_HOME/dslog/config.toml`
pub fn config_file() -> PathBuf {
    config_dir().join("config.toml")
}

/// Ensure a directory exists, creating it if necessary
///
/// Returns the absolute form of the path.
pub fn ensure_dir(path: &Path) -> Result<PathBuf> {
    if !path.exists() {
        std::fs::create_dir_all(path).map_err(|e| DslogError::FileWrite {
            path: path.to_path_buf(),
            source: e,
        })?;
    }
    if !path.is_dir() {
        return Err(DslogError::FileWrite {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::Other, "not a directory"),
        });
    }
    path.canonicalize().map_err(|e| DslogError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })
}
