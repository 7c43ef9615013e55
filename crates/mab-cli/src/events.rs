//! # Events Subcommand
//!
//! Lists the registered host events and their field rules.
//!
//! ```bash
//! mab events
//! mab events viewport-changed
//! ```

use std::io::Write;

use anyhow::{bail, Result};
use clap::Args;

use mab_schema::SchemaRegistry;

/// Arguments for the events subcommand.
#[derive(Args, Debug)]
pub struct EventsArgs {
    /// Show only this event.
    pub event: Option<String>,

    /// List event names only, one per line.
    #[arg(long)]
    pub names_only: bool,
}

/// Execute the events subcommand.
pub fn run_events(args: &EventsArgs, registry: &SchemaRegistry, mut out: impl Write) -> Result<u8> {
    let schemas: Vec<_> = match &args.event {
        Some(name) => match registry.get(name) {
            Some(schema) => vec![schema],
            None => bail!("unknown event: {name:?}"),
        },
        None => registry.iter().collect(),
    };

    for schema in schemas {
        writeln!(out, "{}", schema.name())?;
        if !args.names_only {
            write!(out, "{}", schema.describe())?;
        }
    }
    Ok(0)
}
