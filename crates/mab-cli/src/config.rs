//! # CLI Configuration
//!
//! Settings that come from the process environment rather than flags:
//!
//! - `MAB_WINDOW_WIDTH`: window width reported to the parser when
//!   `--window-width` is not given. Defaults to `0`.
//! - `MAB_LOG_FORMAT`: `json` for JSON log lines, `pretty` (or unset) for
//!   human-readable output.
//!
//! Unparseable values are errors; nothing is silently ignored.

use anyhow::{bail, Context, Result};

/// Environment variable holding the default window width.
pub const WINDOW_WIDTH_VAR: &str = "MAB_WINDOW_WIDTH";

/// Environment variable selecting the log output format.
pub const LOG_FORMAT_VAR: &str = "MAB_LOG_FORMAT";

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Configuration resolved from the environment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CliConfig {
    /// Window width used when no `--window-width` flag is given.
    pub window_width: u32,
    /// Log output format.
    pub log_format: LogFormat,
}

impl CliConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let window_width = match lookup(WINDOW_WIDTH_VAR) {
            Some(raw) => raw.trim().parse::<u32>().with_context(|| {
                format!("{WINDOW_WIDTH_VAR} must be a non-negative integer, got {raw:?}")
            })?,
            None => 0,
        };

        let log_format = match lookup(LOG_FORMAT_VAR).as_deref().map(str::trim) {
            None | Some("") | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => bail!("{LOG_FORMAT_VAR} must be \"json\" or \"pretty\", got {other:?}"),
        };

        Ok(Self {
            window_width,
            log_format,
        })
    }
}
