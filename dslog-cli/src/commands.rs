//! Command execution

use std::io::{self, BufRead};

use chrono::Local;
use dslog_core::sequence::{list_logs, next_file_name};
use dslog_core::{ConfigLoader, LogSeverity, Logger, LoggerConfig};
use dslog_protocol::candidate_addresses;
use dslog_utils::Result;

use crate::cli::{Cli, Command};

/// Build the logger configuration from the config file and flags
pub fn resolve_config(cli: &Cli) -> Result<LoggerConfig> {
    let mut config = match &cli.config {
        Some(path) => ConfigLoader::load_from_path(path)?,
        None => ConfigLoader::load()?,
    };

    if let Some(name) = &cli.app_name {
        config.app_name = name.clone();
    }
    if let Some(dir) = &cli.logs_dir {
        config.logs_dir = Some(dir.clone());
    }
    if cli.quiet {
        config.echo_stderr = false;
    }

    ConfigLoader::validate(&config)?;
    Ok(config)
}

/// Run a command, returning the process exit code
pub fn execute(cli: Cli) -> Result<i32> {
    let config = resolve_config(&cli)?;
    tracing::debug!(app = %config.app_name, "resolved configuration");

    match cli.command {
        Command::Emit { level, message } => {
            let logger = Logger::new(config);
            logger.emit(parse_level(&level), message.join(" "));
            logger.close();
            print_log_path(&logger);
        }
        Command::Pipe { level } => {
            let logger = Logger::new(config);
            logger.start();
            pipe_lines(&logger, parse_level(&level), io::stdin().lock());
            logger.close();
            print_log_path(&logger);
        }
        Command::Path => {
            let dir = config.resolve_logs_dir()?;
            let next = next_file_name(&dir, &config.extension, &Local::now())?;
            println!("logs:   {}", dir.display());
            println!("next:   {}", next);
            println!("mirror: {}", config.resolve_mirror_path().display());
        }
        Command::List => {
            let dir = config.resolve_logs_dir()?;
            for path in list_logs(&dir, &config.extension)? {
                println!("{}", path.display());
            }
        }
        Command::Addresses { team } => {
            for address in candidate_addresses(team) {
                println!("{}", address);
            }
        }
    }

    Ok(0)
}

/// Emit every line of `input` until EOF or a read error
///
/// Lines that are not valid UTF-8 are written lossily instead of ending the stream.
fn pipe_lines(logger: &Logger, severity: LogSeverity, mut input: impl BufRead) {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match input.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf);
                logger.emit(severity, line.trim_end_matches(['\n', '\r']));
            }
            Err(e) => {
                tracing::warn!(error = %e, "stopped reading stdin");
                break;
            }
        }
    }
}

fn parse_level(level: &str) -> LogSeverity {
    level.parse().unwrap_or_default()
}

fn print_log_path(logger: &Logger) {
    if let Some(path) = logger.log_path() {
        println!("{}", path.display());
    }
}
