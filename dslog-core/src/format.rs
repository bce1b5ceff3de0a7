//! Fixed-width text layout of log files
//!
//! Both the header and every row use three left-justified columns of 14, 13
//! and 12 characters separated by single spaces. Messages longer than their
//! column simply run on.

use std::time::Duration;

use chrono::{DateTime, Local};

use crate::severity::LogSeverity;

/// Width of the dashed separator lines
pub const BANNER_WIDTH: usize = 72;

/// Format of the "Log created on" header line
pub const CREATED_FORMAT: &str = "%b %d %Y - %H:%M:%S %p";

/// Dashed separator line, without newline
pub fn banner() -> String {
    "-".repeat(BANNER_WIDTH)
}

/// One newline-terminated three-column row
pub fn format_row(time: &str, level: &str, message: &str) -> String {
    format!("{:<14} {:<13} {:<12}\n", time, level, message)
}

/// Render elapsed time as `MM:SS.d`
///
/// Minutes wrap at 60. `d` is the first digit of the millisecond remainder
/// written out in decimal, so 340 ms shows as `.3` but 5 ms shows as `.5`.
/// Existing log readers depend on this exact truncation.
pub fn format_elapsed(elapsed: Duration) -> String {
    let total_ms = elapsed.as_millis();
    let secs = total_ms / 1000;
    let mins = (secs / 60) % 60;
    let secs = secs % 60;
    let ms = (total_ms % 1000).to_string();
    let tenth = ms.chars().next().unwrap_or('0');

    format!("{:02}:{:02}.{}", mins, secs, tenth)
}

/// A single message on its way into the sinks
#[derive(Debug, Clone, Copy)]
pub struct LogRecord<'a> {
    pub elapsed: Duration,
    pub severity: LogSeverity,
    pub message: &'a str,
}

impl LogRecord<'_> {
    /// Render the record as a row
    pub fn render(&self) -> String {
        format_row(
            &format_elapsed(self.elapsed),
            self.severity.label(),
            self.message,
        )
    }
}

/// Metadata printed at the top of every log
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub created: DateTime<Local>,
    pub os: String,
    pub app_name: String,
    pub app_version: String,
}

/// Render the full header block, ending with the separator under the column titles
pub fn format_header(info: &HeaderInfo) -> String {
    let banner = banner();
    let mut out = String::new();

    out.push_str(&section(&banner, "Start of log"));
    out.push_str(&format!(
        "Log created on:      {}\n",
        info.created.format(CREATED_FORMAT)
    ));
    out.push_str(&format!("Operating System:    {}\n", info.os));
    out.push_str(&format!("Application name:    {}\n", info.app_name));
    out.push_str(&format!("Application version: {}\n\n", info.app_version));

    out.push_str(&banner);
    out.push('\n');
    out.push_str(&format_row("ELAPSED TIME", "ERROR LEVEL", "MESSAGE"));
    out.push_str(&banner);
    out.push('\n');

    out
}

fn section(banner: &str, title: &str) -> String {
    format!("{banner}\n{}\n{banner}\n\n", title.to_uppercase())
}
