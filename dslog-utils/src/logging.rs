//! Tracing setup for dslog's own diagnostics
//!
//! The session and writer report fallbacks and lifecycle events through
//! `tracing`. This module wires those events to stderr for binaries; it has
//! nothing to do with the rows written into `.qdslog` files.

use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::{DslogError, Result};

/// Environment variable holding the tracing filter
pub const TRACE_ENV: &str = "DSLOG_TRACE";

/// Tracing output destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutput {
    /// Emit diagnostics on stderr
    Stderr,
    /// Discard diagnostics entirely
    Off,
}

/// Tracing configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Output destination
    pub output: LogOutput,
    /// Filter directive (e.g., "warn", "dslog_core=debug")
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            output: LogOutput::Stderr,
            filter: "warn".into(),
        }
    }
}

impl LogConfig {
    /// Config for the CLI: filter from `DSLOG_TRACE`, defaults to "warn"
    pub fn cli() -> Self {
        Self {
            filter: std::env::var(TRACE_ENV).unwrap_or_else(|_| "warn".into()),
            ..Self::default()
        }
    }
}

/// Initialize tracing with custom configuration
pub fn init_logging_with_config(config: LogConfig) -> Result<()> {
    if config.output == LogOutput::Off {
        return Ok(());
    }

    let filter = EnvFilter::try_new(&config.filter)
        .map_err(|e| DslogError::config(format!("Invalid trace filter: {}", e)))?;

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| DslogError::internal(format!("Failed to init tracing: {}", e)))?;

    Ok(())
}
