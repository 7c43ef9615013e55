//! # Parse Subcommand
//!
//! Validates a single host event payload and prints the resolved payload
//! as JSON.
//!
//! ```bash
//! mab parse popup-closed '{"button_id":100}'
//! echo '{"height":900,"is_state_stable":true,"is_expanded":true}' \
//!     | mab parse viewport-changed --window-width 1280
//! ```
//!
//! Exit status is `0` for an accepted payload and `2` for a rejected one.

use std::io::{Read, Write};

use anyhow::{Context, Result};
use clap::Args;

use mab_core::EnvironmentSnapshot;
use mab_schema::{BridgeEvent, SchemaRegistry};

use crate::config::CliConfig;

/// Exit status for a payload the schema rejected.
pub const EXIT_REJECTED: u8 = 2;

/// Arguments for the parse subcommand.
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Event name (e.g. `theme-changed`).
    pub event: String,

    /// JSON payload. Read from stdin when omitted.
    pub payload: Option<String>,

    /// Window width to report to the parser. Overrides MAB_WINDOW_WIDTH.
    #[arg(long)]
    pub window_width: Option<u32>,

    /// Print the typed event (`{"event": ..., "payload": ...}`) instead of
    /// the bare resolved payload.
    #[arg(long)]
    pub typed: bool,

    /// Pretty-print the output.
    #[arg(long)]
    pub pretty: bool,
}

/// Execute the parse subcommand.
///
/// Returns the process exit status. I/O failures are errors; a rejected
/// payload is reported on `err` and yields [`EXIT_REJECTED`].
pub fn run_parse(
    args: &ParseArgs,
    config: &CliConfig,
    input: impl Read,
    mut out: impl Write,
    mut err: impl Write,
) -> Result<u8> {
    let payload = match &args.payload {
        Some(p) => p.clone(),
        None => read_payload(input)?,
    };

    let env = EnvironmentSnapshot::new(args.window_width.unwrap_or(config.window_width));
    tracing::debug!(event = %args.event, window_width = env.window_width, "parsing payload");

    let parsed = match SchemaRegistry::global().parse(&args.event, payload.as_str(), &env) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::info!(event = %args.event, kind = e.kind(), "payload rejected");
            writeln!(err, "error: {e}")?;
            return Ok(EXIT_REJECTED);
        }
    };

    let rendered = if args.typed {
        let typed = BridgeEvent::from_parsed(parsed).context("typing parsed payload")?;
        render(&typed, args.pretty)?
    } else {
        render(&parsed.into_value(), args.pretty)?
    };
    writeln!(out, "{rendered}")?;
    Ok(0)
}

fn read_payload(mut input: impl Read) -> Result<String> {
    let mut buf = String::new();
    input
        .read_to_string(&mut buf)
        .context("reading payload from stdin")?;
    Ok(buf)
}

fn render(value: &impl serde::Serialize, pretty: bool) -> Result<String> {
    let s = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(s)
}
