//! Lockstamp: cross-process file locks with commit stamps.
//!
//! This is the main entry point for the `lockstamp` CLI. It parses arguments,
//! loads configuration, dispatches to the appropriate command handler, and
//! handles errors with proper exit codes.

mod cli;
mod commands;
mod logging;

use cli::Cli;
use lockstamp::{Config, Result};
use std::process::ExitCode;

fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => Config::load(path),
        None => Ok(Config::default()),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    let result = load_config(&cli).and_then(|config| {
        logging::init_logging(&config);
        commands::dispatch(cli.command, &config)
    });

    match result {
        Ok(code) => ExitCode::from(code as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use lockstamp::exit_codes;
    use tempfile::TempDir;

    #[test]
    fn load_config_defaults_without_flag() {
        let cli = Cli::try_parse_from(["lockstamp", "cat", "users.tbl"]).unwrap();
        assert_eq!(load_config(&cli).unwrap(), Config::default());
    }

    #[test]
    fn load_config_reports_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.yaml");
        let cli = Cli::try_parse_from([
            "lockstamp",
            "--config",
            missing.to_str().unwrap(),
            "cat",
            "users.tbl",
        ])
        .unwrap();

        let err = load_config(&cli).unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::CONFIG_ERROR);
    }
}
