//! CLI argument parsing

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Diagnostic log writer
#[derive(Parser, Debug)]
#[command(name = "dslog")]
#[command(about = "Write and inspect numbered diagnostic logs")]
#[command(version)]
pub struct Cli {
    /// Configuration file (default: $XDG_CONFIG_HOME/dslog/config.toml)
    #[arg(long, env = "DSLOG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Application name used for the log directory and header
    #[arg(long)]
    pub app_name: Option<String>,

    /// Directory for persistent logs
    #[arg(long, env = "DSLOG_LOGS_DIR")]
    pub logs_dir: Option<PathBuf>,

    /// Do not echo rows to stderr
    #[arg(short, long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write one message and close the log
    Emit {
        /// Severity (debug, warning, critical, fatal; anything else is system)
        #[arg(short, long, default_value = "system")]
        level: String,

        /// Message words
        #[arg(trailing_var_arg = true, required = true)]
        message: Vec<String>,
    },

    /// Write every line of stdin as a message until EOF
    Pipe {
        /// Severity for every line
        #[arg(short, long, default_value = "system")]
        level: String,
    },

    /// Print the log directory, the next log name and the mirror path
    Path,

    /// List existing logs, oldest first
    List,

    /// Print the candidate robot addresses for a team
    Addresses {
        /// Team number
        team: u16,
    },
}
