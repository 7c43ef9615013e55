//! # mab CLI entry point
//!
//! Parses command-line arguments, loads environment configuration, and
//! dispatches to the subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use mab_cli::config::CliConfig;
use mab_cli::events::{run_events, EventsArgs};
use mab_cli::parse::{run_parse, ParseArgs};
use mab_schema::SchemaRegistry;

/// Mini-app bridge toolchain.
///
/// Validates host event payloads against the bridge's event schemas.
#[derive(Parser, Debug)]
#[command(name = "mab", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse a host event payload and print the resolved payload.
    Parse(ParseArgs),

    /// List registered events and their field rules.
    Events(EventsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match CliConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("configuration error: {e:#}");
            return ExitCode::from(1);
        }
    };

    mab_cli::init_tracing(cli.verbose, config.log_format);
    tracing::debug!(?config, "mab CLI starting");

    let result = match &cli.command {
        Commands::Parse(args) => run_parse(
            args,
            &config,
            std::io::stdin().lock(),
            std::io::stdout().lock(),
            std::io::stderr().lock(),
        ),
        Commands::Events(args) => {
            run_events(args, SchemaRegistry::global(), std::io::stdout().lock())
        }
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parse_parse_with_payload() {
        let cli = Cli::try_parse_from(["mab", "parse", "popup-closed", "{}"]).unwrap();
        if let Commands::Parse(args) = cli.command {
            assert_eq!(args.event, "popup-closed");
            assert_eq!(args.payload.as_deref(), Some("{}"));
            assert!(args.window_width.is_none());
            assert!(!args.typed);
        } else {
            panic!("Expected Parse");
        }
    }

    #[test]
    fn cli_parse_parse_flags() {
        let cli = Cli::try_parse_from([
            "mab",
            "-vv",
            "parse",
            "viewport-changed",
            "--window-width",
            "1280",
            "--typed",
            "--pretty",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        if let Commands::Parse(args) = cli.command {
            assert_eq!(args.window_width, Some(1280));
            assert!(args.payload.is_none());
            assert!(args.typed);
            assert!(args.pretty);
        } else {
            panic!("Expected Parse");
        }
    }

    #[test]
    fn cli_parse_rejects_negative_width() {
        assert!(Cli::try_parse_from([
            "mab",
            "parse",
            "viewport-changed",
            "--window-width",
            "-5"
        ])
        .is_err());
    }

    #[test]
    fn cli_parse_events() {
        let cli = Cli::try_parse_from(["mab", "events", "--names-only"]).unwrap();
        if let Commands::Events(args) = cli.command {
            assert!(args.names_only);
            assert!(args.event.is_none());
        } else {
            panic!("Expected Events");
        }
    }

    #[test]
    fn cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["mab"]).is_err());
    }
}
