//! Producer-facing logger
//!
//! [`Logger`] is the only thing producers talk to. Every call runs
//! start → format → write → flush under one lock, so rows from different
//! threads never interleave and the start/close transitions never race.

use std::path::PathBuf;

use parking_lot::Mutex;

use crate::config::LoggerConfig;
use crate::format::LogRecord;
use crate::session::LogSession;
use crate::severity::LogSeverity;

/// Fire-and-forget diagnostic logger
///
/// Share it between threads with `Arc<Logger>`. Call [`Logger::close`] from
/// the host's shutdown path; after that every write is silently dropped.
#[derive(Debug)]
pub struct Logger {
    session: Mutex<LogSession>,
}

impl Logger {
    pub fn new(config: LoggerConfig) -> Self {
        Self {
            session: Mutex::new(LogSession::new(config)),
        }
    }

    /// Write one message
    ///
    /// Opens the session on first use. Never fails and never panics: once
    /// closed, the message is dropped.
    pub fn emit(&self, severity: LogSeverity, message: impl AsRef<str>) {
        let mut session = self.session.lock();
        if session.is_closed() {
            return;
        }

        session.ensure_started();

        let record = LogRecord {
            elapsed: session.elapsed(),
            severity,
            message: message.as_ref(),
        };
        session.write_row(&record.render());
    }

    pub fn debug(&self, message: impl AsRef<str>) {
        self.emit(LogSeverity::Debug, message);
    }

    pub fn warning(&self, message: impl AsRef<str>) {
        self.emit(LogSeverity::Warning, message);
    }

    pub fn critical(&self, message: impl AsRef<str>) {
        self.emit(LogSeverity::Critical, message);
    }

    pub fn fatal(&self, message: impl AsRef<str>) {
        self.emit(LogSeverity::Fatal, message);
    }

    pub fn system(&self, message: impl AsRef<str>) {
        self.emit(LogSeverity::System, message);
    }

    /// Open the session and write the header without emitting a row
    pub fn start(&self) {
        self.session.lock().ensure_started();
    }

    /// Flush and release the log file; safe to call any number of times
    pub fn close(&self) {
        self.session.lock().close();
    }

    pub fn is_started(&self) -> bool {
        self.session.lock().is_started()
    }

    pub fn is_closed(&self) -> bool {
        self.session.lock().is_closed()
    }

    /// Persistent log file of this run, once known
    pub fn log_path(&self) -> Option<PathBuf> {
        self.session.lock().log_path().map(PathBuf::from)
    }

    /// Mirror file of this run, once opened
    pub fn mirror_path(&self) -> Option<PathBuf> {
        self.session.lock().mirror_path().map(PathBuf::from)
    }
}
