//! Log session lifecycle
//!
//! A session moves Uninitialized → Open → Closed and never goes back. Opening
//! resolves the next numbered log file, opens both sinks and writes the
//! header. If the persistent file cannot be created the session writes to
//! stderr instead; it never refuses to produce output.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use chrono::Local;
use dslog_utils::{DslogError, Result};

use crate::config::LoggerConfig;
use crate::format::{format_header, HeaderInfo};
use crate::host::os_description;
use crate::sequence::next_file_name;

/// Destination of the persistent rows
enum FileSink {
    File(BufWriter<File>),
    Stderr,
}

impl Write for FileSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::File(w) => w.write(buf),
            Self::Stderr => io::stderr().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::File(w) => w.flush(),
            Self::Stderr => io::stderr().flush(),
        }
    }
}

struct Sinks {
    file: FileSink,
    mirror: Option<BufWriter<File>>,
}

enum State {
    Uninitialized,
    Open(Sinks),
    Closed,
}

/// State owned by one logger for one process run
pub struct LogSession {
    config: LoggerConfig,
    state: State,
    started: Option<Instant>,
    log_path: Option<PathBuf>,
    mirror_path: Option<PathBuf>,
}

impl std::fmt::Debug for LogSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogSession")
            .field("app_name", &self.config.app_name)
            .field("started", &self.is_started())
            .field("closed", &self.is_closed())
            .field("log_path", &self.log_path)
            .field("mirror_path", &self.mirror_path)
            .finish()
    }
}

impl LogSession {
    /// Create an unopened session; nothing touches the filesystem yet
    pub fn new(config: LoggerConfig) -> Self {
        Self {
            config,
            state: State::Uninitialized,
            started: None,
            log_path: None,
            mirror_path: None,
        }
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// True once opened, including after close
    pub fn is_started(&self) -> bool {
        self.started.is_some()
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.state, State::Closed)
    }

    /// Persistent log file, `None` before start or when writing to stderr
    pub fn log_path(&self) -> Option<&Path> {
        self.log_path.as_deref()
    }

    /// Mirror file, `None` before start or when it could not be opened
    pub fn mirror_path(&self) -> Option<&Path> {
        self.mirror_path.as_deref()
    }

    /// True when the persistent sink fell back to stderr
    pub fn is_fallback(&self) -> bool {
        matches!(
            self.state,
            State::Open(Sinks {
                file: FileSink::Stderr,
                ..
            })
        )
    }

    /// Time since the session was opened, zero before that
    pub fn elapsed(&self) -> Duration {
        self.started.map(|s| s.elapsed()).unwrap_or_default()
    }

    /// Open the session on first use; later calls do nothing
    pub fn ensure_started(&mut self) {
        if !matches!(self.state, State::Uninitialized) {
            return;
        }

        self.started = Some(Instant::now());

        let file = match self.open_log_file() {
            Ok((path, file)) => {
                tracing::debug!(path = %path.display(), "opened log file");
                self.log_path = Some(path);
                FileSink::File(BufWriter::new(file))
            }
            Err(e) => {
                tracing::warn!(error = %e, "log file unavailable, writing to stderr");
                FileSink::Stderr
            }
        };

        let mirror_path = self.config.resolve_mirror_path();
        let mirror = match create_truncated(&mirror_path) {
            Ok(file) => {
                self.mirror_path = Some(mirror_path);
                Some(BufWriter::new(file))
            }
            Err(e) => {
                tracing::warn!(error = %e, "mirror file unavailable");
                None
            }
        };

        let mut sinks = Sinks { file, mirror };
        let header = format_header(&HeaderInfo {
            created: Local::now(),
            os: os_description(),
            app_name: self.config.app_name.clone(),
            app_version: self.config.app_version.clone(),
        });
        write_all_sinks(&mut sinks, header.as_bytes(), false);

        self.state = State::Open(sinks);
    }

    /// Write one formatted row to every sink and flush
    ///
    /// Does nothing unless the session is open. A failing sink does not keep
    /// the row from the others.
    pub fn write_row(&mut self, row: &str) {
        let echo = self.config.echo_stderr;
        if let State::Open(sinks) = &mut self.state {
            write_all_sinks(sinks, row.as_bytes(), echo);
        }
    }

    /// Flush both sinks without closing
    pub fn flush(&mut self) {
        if let State::Open(sinks) = &mut self.state {
            let _ = sinks.file.flush();
            if let Some(mirror) = &mut sinks.mirror {
                let _ = mirror.flush();
            }
        }
    }

    /// Flush and release the sinks; only the first call has any effect
    ///
    /// Closing a session that was never opened does nothing, so a later
    /// write still opens it.
    pub fn close(&mut self) {
        if !matches!(self.state, State::Open(_)) {
            return;
        }

        if let State::Open(mut sinks) = std::mem::replace(&mut self.state, State::Closed) {
            let _ = sinks.file.flush();
            if let Some(mirror) = &mut sinks.mirror {
                let _ = mirror.flush();
            }
            tracing::debug!("log session closed");
        }
    }

    fn open_log_file(&self) -> Result<(PathBuf, File)> {
        let dir = self.config.resolve_logs_dir()?;
        let name = next_file_name(&dir, &self.config.extension, &Local::now())?;
        let path = dir.join(name);
        let file = create_truncated(&path)?;
        Ok((path, file))
    }
}

impl Drop for LogSession {
    fn drop(&mut self) {
        self.flush();
    }
}

fn create_truncated(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|e| DslogError::FileWrite {
            path: path.to_path_buf(),
            source: e,
        })
}

fn write_all_sinks(sinks: &mut Sinks, bytes: &[u8], echo: bool) {
    if let Err(e) = sinks.file.write_all(bytes).and_then(|_| sinks.file.flush()) {
        tracing::debug!(error = %e, "persistent sink write failed");
    }

    if let Some(mirror) = &mut sinks.mirror {
        if let Err(e) = mirror.write_all(bytes).and_then(|_| mirror.flush()) {
            tracing::debug!(error = %e, "mirror sink write failed");
        }
    }

    // Rows already reach stderr when it stands in for the log file
    if echo && !matches!(sinks.file, FileSink::Stderr) {
        let _ = io::stderr().write_all(bytes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_config(temp: &TempDir) -> LoggerConfig {
        LoggerConfig::new("SessionTest", "9.9.9")
            .with_logs_dir(temp.path().join("Logs"))
            .with_mirror_path(temp.path().join("mirror.log"))
            .with_echo_stderr(false)
    }

    #[test]
    fn test_new_session_is_uninitialized() {
        let temp = TempDir::new().unwrap();
        let session = LogSession::new(test_config(&temp));

        assert!(!session.is_started());
        assert!(!session.is_closed());
        assert!(session.log_path().is_none());
        assert_eq!(session.elapsed(), Duration::ZERO);
        assert!(!temp.path().join("Logs").exists());
    }

    #[test]
    fn test_ensure_started_opens_numbered_file() {
        let temp = TempDir::new().unwrap();
        let mut session = LogSession::new(test_config(&temp));
        session.ensure_started();

        assert!(session.is_started());
        assert!(!session.is_fallback());
        let path = session.log_path().unwrap().to_path_buf();
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("Log 0000 ("), "got {}", name);
        assert!(name.ends_with(").qdslog"));

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("START OF LOG"));
        assert!(contents.contains("Application name:    SessionTest"));
        assert!(contents.contains("Application version: 9.9.9"));
    }

    #[test]
    fn test_ensure_started_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let mut session = LogSession::new(test_config(&temp));
        session.ensure_started();
        let first = session.log_path().unwrap().to_path_buf();
        session.ensure_started();
        session.ensure_started();

        assert_eq!(session.log_path().unwrap(), first);
        let entries = std::fs::read_dir(temp.path().join("Logs")).unwrap().count();
        assert_eq!(entries, 1);

        let contents = std::fs::read_to_string(&first).unwrap();
        assert_eq!(contents.matches("START OF LOG").count(), 1);
    }

    #[test]
    fn test_mirror_gets_header_and_rows() {
        let temp = TempDir::new().unwrap();
        let mut session = LogSession::new(test_config(&temp));
        session.ensure_started();
        session.write_row("row one\n");

        let mirror = std::fs::read_to_string(temp.path().join("mirror.log")).unwrap();
        assert!(mirror.starts_with(&crate::format::banner()));
        assert!(mirror.ends_with("row one\n"));
    }

    #[test]
    fn test_mirror_truncated_each_session() {
        let temp = TempDir::new().unwrap();
        let mirror_path = temp.path().join("mirror.log");
        std::fs::write(&mirror_path, "stale session contents\n").unwrap();

        let mut session = LogSession::new(test_config(&temp));
        session.ensure_started();

        let mirror = std::fs::read_to_string(&mirror_path).unwrap();
        assert!(!mirror.contains("stale session"));
    }

    #[test]
    fn test_fallback_when_dir_unusable() {
        let temp = TempDir::new().unwrap();
        // A regular file where the log directory should be
        let blocker = temp.path().join("Logs");
        std::fs::write(&blocker, b"").unwrap();

        let mut session = LogSession::new(test_config(&temp));
        session.ensure_started();

        assert!(session.is_started());
        assert!(session.is_fallback());
        assert!(session.log_path().is_none());
        // Writing after the fallback never fails
        session.write_row("still logging\n");
        let mirror = std::fs::read_to_string(temp.path().join("mirror.log")).unwrap();
        assert!(mirror.contains("still logging"));
    }

    #[test]
    fn test_close_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let mut session = LogSession::new(test_config(&temp));
        session.ensure_started();

        session.close();
        assert!(session.is_closed());
        session.close();
        assert!(session.is_closed());
        assert!(session.is_started());
    }

    #[test]
    fn test_no_reopen_after_close() {
        let temp = TempDir::new().unwrap();
        let mut session = LogSession::new(test_config(&temp));
        session.ensure_started();
        let path = session.log_path().unwrap().to_path_buf();
        session.close();

        let before = std::fs::read(&path).unwrap();
        session.ensure_started();
        session.write_row("dropped\n");
        let after = std::fs::read(&path).unwrap();

        assert_eq!(before, after);
        assert!(session.is_closed());
    }

    #[test]
    fn test_close_before_start_is_noop() {
        let temp = TempDir::new().unwrap();
        let mut session = LogSession::new(test_config(&temp));
        session.close();

        assert!(!session.is_closed());
        assert!(!session.is_started());
        assert!(!temp.path().join("Logs").exists());

        session.ensure_started();
        session.write_row("after early close\n");

        assert!(session.is_started());
        let path = session.log_path().unwrap().to_path_buf();
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("Log 0000 ("), "got {}", name);
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.ends_with("after early close\n"));
    }

    #[test]
    fn test_mirror_unavailable_keeps_persistent_file() {
        let temp = TempDir::new().unwrap();
        // The mirror's parent is a regular file, so it cannot be created
        let blocker = temp.path().join("blocker");
        std::fs::write(&blocker, b"").unwrap();
        let config = test_config(&temp).with_mirror_path(blocker.join("mirror.log"));

        let mut session = LogSession::new(config);
        session.ensure_started();
        session.write_row("persistent only\n");

        assert!(!session.is_fallback());
        assert!(session.mirror_path().is_none());
        let contents = std::fs::read_to_string(session.log_path().unwrap()).unwrap();
        assert!(contents.contains("START OF LOG"));
        assert!(contents.ends_with("persistent only\n"));
    }

    #[test]
    fn test_elapsed_advances() {
        let temp = TempDir::new().unwrap();
        let mut session = LogSession::new(test_config(&temp));
        session.ensure_started();
        std::thread::sleep(Duration::from_millis(20));
        assert!(session.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn test_debug_output() {
        let temp = TempDir::new().unwrap();
        let session = LogSession::new(test_config(&temp));
        let debug = format!("{:?}", session);
        assert!(debug.contains("LogSession"));
        assert!(debug.contains("SessionTest"));
    }
}
