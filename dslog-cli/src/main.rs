//! dslog: command-line front end for the dslog logger
//!
//! Writes messages into numbered logs from scripts or pipes and inspects the
//! log directory.

mod cli;
mod commands;

use clap::Parser;
use cli::Cli;
use dslog_utils::{init_logging_with_config, LogConfig};

fn main() {
    if let Err(e) = init_logging_with_config(LogConfig::cli()) {
        eprintln!("{}", e);
    }

    let cli = Cli::parse();

    let exit_code = match commands::execute(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", e);
            1
        }
    };

    std::process::exit(exit_code);
}
