//! dslog-core: Session lifecycle and write pipeline
//!
//! Producers hand a severity and a message to a [`Logger`]. The first message
//! opens the next numbered log file under `~/.<app>/Logs/`, writes the header
//! and starts the elapsed clock; every message becomes one fixed-width row in
//! that file and in the mirror file in the temporary directory.
//!
//! ```no_run
//! use dslog_core::{Logger, LoggerConfig, LogSeverity};
//!
//! let logger = Logger::new(LoggerConfig::new("QDriverStation", "16.08"));
//! logger.emit(LogSeverity::Warning, "Robot communications lost");
//! logger.close();
//! ```

pub mod config;
pub mod format;
pub mod global;
pub mod host;
pub mod sequence;
pub mod session;
pub mod severity;
pub mod writer;

pub use config::{ConfigLoader, LoggerConfig};
pub use format::{format_elapsed, format_row, LogRecord};
pub use session::LogSession;
pub use severity::LogSeverity;
pub use writer::Logger;
