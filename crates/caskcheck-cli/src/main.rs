//! caskcheck CLI - Command-line interface for caskcheck

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

mod check;
mod logging;
mod report;

use report::OutputFormat;

#[derive(Parser)]
#[command(name = "caskcheck")]
#[command(version = caskcheck_core::VERSION)]
#[command(about = "Structural checks for parsed cask manifests", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check parsed cask documents (JSON) for top-level stanza overrides
    Check {
        /// Paths to the documents
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Configuration file (defaults to ./caskcheck.toml when present)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the effective configuration
    PrintConfig {
        /// Configuration file (defaults to ./caskcheck.toml when present)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

/// Exit status when offenses were reported
const EXIT_OFFENSES: u8 = 1;
/// Exit status for usage, I/O and configuration errors
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(EXIT_OFFENSES),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Dispatch a command; `Ok(false)` means offenses were reported.
fn run(cli: Cli) -> Result<bool> {
    match cli.command {
        Commands::Check {
            files,
            config,
            format,
        } => {
            let options = check::CheckOptions {
                files,
                config,
                format,
            };
            check::run(&options)
        }

        Commands::PrintConfig { config } => {
            let cwd = std::env::current_dir()?;
            let config = check::load_config(config.as_deref(), &cwd)?;
            print!("{}", config.to_toml_string()?);
            Ok(true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_check_arguments() {
        let cli = Cli::try_parse_from([
            "caskcheck",
            "check",
            "a.json",
            "b.json",
            "--format",
            "json",
            "--config",
            "custom.toml",
        ])
        .unwrap();
        match cli.command {
            Commands::Check {
                files,
                config,
                format,
            } => {
                assert_eq!(files, [PathBuf::from("a.json"), PathBuf::from("b.json")]);
                assert_eq!(config, Some(PathBuf::from("custom.toml")));
                assert_eq!(format, OutputFormat::Json);
            }
            Commands::PrintConfig { .. } => panic!("expected check"),
        }
    }

    #[test]
    fn check_requires_files() {
        assert!(Cli::try_parse_from(["caskcheck", "check"]).is_err());
    }
}
