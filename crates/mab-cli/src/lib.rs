//! # mab-cli — Mini-App Bridge Command-Line Interface
//!
//! Provides the `mab` binary for exercising the bridge's event parser
//! outside a web view: replaying captured host payloads, checking what a
//! payload resolves to, and listing the registered schemas.
//!
//! ## Subcommands
//!
//! - `mab parse <event> [payload]`: validate one payload, print the result.
//! - `mab events [event]`: list events and their field rules.
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from the handlers; handlers take their
//!   input and output streams as parameters.
//! - No parsing logic here; everything delegates to `mab-schema`.

pub mod config;
pub mod events;
pub mod parse;

use tracing_subscriber::EnvFilter;

use crate::config::LogFormat;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise verbosity picks the level
/// (`warn`, `info`, `debug`, `trace`).
pub fn init_tracing(verbose: u8, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}
