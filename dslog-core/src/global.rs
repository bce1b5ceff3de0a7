//! Optional process-wide logger
//!
//! Hosts that cannot thread a [`Logger`] through their code can install one
//! here. Emitting before anything is installed installs a logger built from
//! the user's configuration file.

use std::sync::OnceLock;

use crate::config::ConfigLoader;
use crate::severity::LogSeverity;
use crate::writer::Logger;

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Install `logger` as the process-wide logger
///
/// Returns the logger back if one is already installed.
pub fn install(logger: Logger) -> Result<(), Logger> {
    LOGGER.set(logger)
}

/// The process-wide logger, installing a default one if needed
pub fn logger() -> &'static Logger {
    LOGGER.get_or_init(|| Logger::new(ConfigLoader::load_or_default()))
}

/// Write one message through the process-wide logger
pub fn emit(severity: LogSeverity, message: impl AsRef<str>) {
    logger().emit(severity, message);
}

/// Close the process-wide logger if one was ever installed
pub fn shutdown() {
    if let Some(logger) = LOGGER.get() {
        logger.close();
    }
}
