//! Error types for dslog
//!
//! Provides a unified error type used across all dslog crates. None of these
//! ever reach a log producer: the writer turns them into fallbacks.

use std::path::PathBuf;

/// Main error type for dslog operations
#[derive(Debug, thiserror::Error)]
pub enum DslogError {
    // === IO Errors ===

    #[error("Failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    // === Configuration Errors ===

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration at {path}: {message}")]
    ConfigInvalid { path: PathBuf, message: String },

    #[error("Configuration file not found: {0}")]
    ConfigNotFound(PathBuf),

    // === Internal Errors ===

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DslogError {
    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Path the error refers to, if any
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::FileRead { path, .. }
            | Self::FileWrite { path, .. }
            | Self::ConfigInvalid { path, .. }
            | Self::ConfigNotFound(path) => Some(path),
            _ => None,
        }
    }
}

/// Result type alias using DslogError
pub type Result<T> = std::result::Result<T, DslogError>;
