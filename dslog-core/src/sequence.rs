//! Sequence-numbered log file names
//!
//! Each new log is named `Log NNNN (MMM dd yyyy - HH_mm_ss).<ext>`, where
//! `NNNN` is how many logs already sit in the directory. Names sort in
//! creation order without any index file, up to 9999 logs.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use dslog_utils::{DslogError, Result};

/// Timestamp embedded in every file name
pub const NAME_TIMESTAMP_FORMAT: &str = "(%b %d %Y - %H_%M_%S)";

/// Visible entries named `*.<extension>`; dot-files never count
fn is_log_name(name: &str, extension: &str) -> bool {
    !name.starts_with('.')
        && name.len() > extension.len()
        && name.ends_with(extension)
        && name[..name.len() - extension.len()].ends_with('.')
}

fn log_entries(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| DslogError::FileRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    Ok(entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| is_log_name(n, extension))
        })
        .collect())
}

/// Number of existing `*.<extension>` entries in `dir`
pub fn sequence_number(dir: &Path, extension: &str) -> Result<usize> {
    Ok(log_entries(dir, extension)?.len())
}

/// Zero-pad to four digits; larger numbers are kept whole
pub fn pad_sequence(number: usize) -> String {
    format!("{:04}", number)
}

/// Build a file name from its parts
pub fn file_name(number: usize, at: &DateTime<Local>, extension: &str) -> String {
    format!(
        "Log {} {}.{}",
        pad_sequence(number),
        at.format(NAME_TIMESTAMP_FORMAT),
        extension
    )
}

/// Name for the next log created in `dir` at `at`
pub fn next_file_name(dir: &Path, extension: &str, at: &DateTime<Local>) -> Result<String> {
    let number = sequence_number(dir, extension)?;
    Ok(file_name(number, at, extension))
}

/// Existing logs in `dir`, oldest first
pub fn list_logs(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut logs = log_entries(dir, extension)?;
    logs.sort();
    Ok(logs)
}
