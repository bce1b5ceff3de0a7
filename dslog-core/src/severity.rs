//! Severity of a log message

use std::convert::Infallible;
use std::str::FromStr;

/// Severity attached to every emitted message
///
/// Anything a producer hands in that does not map to one of the named levels
/// is classified as [`LogSeverity::System`]; classification never fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LogSeverity {
    Debug,
    Warning,
    Critical,
    Fatal,
    #[default]
    System,
}

impl LogSeverity {
    /// Label written into the ERROR LEVEL column
    pub fn label(&self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Warning => "WARNING",
            Self::Critical => "CRITICAL",
            Self::Fatal => "FATAL",
            Self::System => "SYSTEM",
        }
    }

    /// Classify a numeric message type (0 debug, 1 warning, 2 critical, 3 fatal)
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Debug,
            1 => Self::Warning,
            2 => Self::Critical,
            3 => Self::Fatal,
            _ => Self::System,
        }
    }
}

impl std::fmt::Display for LogSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LogSeverity {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "debug" => Self::Debug,
            "warning" | "warn" => Self::Warning,
            "critical" | "error" => Self::Critical,
            "fatal" => Self::Fatal,
            _ => Self::System,
        })
    }
}

impl From<tracing::Level> for LogSeverity {
    fn from(level: tracing::Level) -> Self {
        match level {
            tracing::Level::TRACE | tracing::Level::DEBUG => Self::Debug,
            tracing::Level::WARN => Self::Warning,
            tracing::Level::ERROR => Self::Critical,
            _ => Self::System,
        }
    }
}
