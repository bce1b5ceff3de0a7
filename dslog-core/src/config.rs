//! Logger configuration and its TOML loader

use std::path::{Path, PathBuf};

use dslog_utils::{config_file, paths, DslogError, Result, LOGS_EXTENSION};
use serde::{Deserialize, Serialize};

/// Overrides the directory persistent logs are written to
pub const LOGS_DIR_ENV: &str = "DSLOG_LOGS_DIR";

/// Logger settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Shown in the header; its lowercase form names the log directory
    pub app_name: String,
    /// Shown in the header
    pub app_version: String,
    /// Extension of persistent log files, without the dot
    pub extension: String,
    /// Directory for persistent logs (default: `~/.<app_name>/Logs`)
    pub logs_dir: Option<PathBuf>,
    /// Mirror file (default: `$TMPDIR/<app_name>.log`)
    pub mirror_path: Option<PathBuf>,
    /// Echo every row to stderr as well
    pub echo_stderr: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            app_name: "DSLog".into(),
            app_version: env!("CARGO_PKG_VERSION").into(),
            extension: LOGS_EXTENSION.into(),
            logs_dir: None,
            mirror_path: None,
            echo_stderr: true,
        }
    }
}

impl LoggerConfig {
    /// Config for an application with the given name and version
    pub fn new(app_name: impl Into<String>, app_version: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            app_version: app_version.into(),
            ..Self::default()
        }
    }

    pub fn with_logs_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.logs_dir = Some(dir.into());
        self
    }

    pub fn with_mirror_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.mirror_path = Some(path.into());
        self
    }

    pub fn with_echo_stderr(mut self, echo: bool) -> Self {
        self.echo_stderr = echo;
        self
    }

    /// Resolve and create the persistent log directory
    pub fn resolve_logs_dir(&self) -> Result<PathBuf> {
        match &self.logs_dir {
            Some(dir) => paths::ensure_dir(dir),
            None => paths::logs_dir(&self.app_name),
        }
    }

    /// Path of the mirror file
    pub fn resolve_mirror_path(&self) -> PathBuf {
        self.mirror_path
            .clone()
            .unwrap_or_else(|| paths::mirror_path(&self.app_name))
    }
}

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the default location, falling back to defaults
    pub fn load() -> Result<LoggerConfig> {
        let path = config_file();
        let mut config = if path.exists() {
            Self::load_from_path(&path)?
        } else {
            LoggerConfig::default()
        };
        Self::apply_env(&mut config);
        Ok(config)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<LoggerConfig> {
        if !path.exists() {
            return Err(DslogError::ConfigNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path).map_err(|e| DslogError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content, path)
    }

    /// Parse configuration from string
    pub fn parse(content: &str, path: &Path) -> Result<LoggerConfig> {
        toml::from_str(content).map_err(|e| DslogError::ConfigInvalid {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Apply environment overrides
    pub fn apply_env(config: &mut LoggerConfig) {
        if let Some(dir) = std::env::var_os(LOGS_DIR_ENV).filter(|d| !d.is_empty()) {
            config.logs_dir = Some(PathBuf::from(dir));
        }
    }

    /// Validate configuration
    pub fn validate(config: &LoggerConfig) -> Result<()> {
        if config.app_name.trim().is_empty() {
            return Err(DslogError::config("app_name must not be empty"));
        }

        if config.app_name.contains(['/', '\\']) {
            return Err(DslogError::config("app_name must not contain path separators"));
        }

        if config.extension.is_empty() {
            return Err(DslogError::config("extension must not be empty"));
        }

        if config.extension.contains(['.', '/', '\\']) {
            return Err(DslogError::config(
                "extension must not contain dots or path separators",
            ));
        }

        Ok(())
    }

    /// Load and validate
    pub fn load_and_validate() -> Result<LoggerConfig> {
        let config = Self::load()?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Load and validate, degrading to defaults on any error
    pub fn load_or_default() -> LoggerConfig {
        Self::load_and_validate().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "using default logger configuration");
            let mut config = LoggerConfig::default();
            Self::apply_env(&mut config);
            config
        })
    }
}
