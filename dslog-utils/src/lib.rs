//! dslog-utils: Common utilities shared across dslog crates
//!
//! This crate provides:
//! - Unified error types ([`DslogError`], [`Result`])
//! - Tracing setup for the crate's own diagnostics ([`init_logging_with_config`], [`LogConfig`])
//! - Log directory and mirror path resolution ([`paths`] module)

pub mod error;
pub mod logging;
pub mod paths;

// Re-export main types at crate root for convenience
pub use error::{DslogError, Result};
pub use logging::{init_logging_with_config, LogConfig, LogOutput};

// Re-export commonly used path functions
pub use paths::{config_dir, config_file, home_dir, logs_dir, mirror_path, LOGS_EXTENSION};
