//! # Event Names
//!
//! The closed set of host events the bridge knows how to parse. Wire names
//! are kebab-case; every `match` on [`EventName`] is exhaustive, so adding an
//! event forces its schema and typed payload to be written.

use std::str::FromStr;

use mab_core::BridgeError;
use serde::{Deserialize, Serialize};

/// Events posted by the native host to the mini-app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventName {
    /// The host's color scheme changed.
    ThemeChanged,
    /// The visible area of the mini-app changed.
    ViewportChanged,
    /// A native popup was dismissed.
    PopupClosed,
    /// The QR scanner recognised text.
    QrTextReceived,
    /// A payment invoice was closed.
    InvoiceClosed,
    /// Clipboard contents were read on request.
    ClipboardTextReceived,
}

/// Number of known events.
pub const EVENT_COUNT: usize = 6;

impl EventName {
    /// All events, in registry order.
    pub fn all() -> &'static [EventName] {
        &[
            Self::ThemeChanged,
            Self::ViewportChanged,
            Self::PopupClosed,
            Self::QrTextReceived,
            Self::InvoiceClosed,
            Self::ClipboardTextReceived,
        ]
    }

    /// The wire identifier of this event.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ThemeChanged => "theme-changed",
            Self::ViewportChanged => "viewport-changed",
            Self::PopupClosed => "popup-closed",
            Self::QrTextReceived => "qr-text-received",
            Self::InvoiceClosed => "invoice-closed",
            Self::ClipboardTextReceived => "clipboard-text-received",
        }
    }
}

impl std::fmt::Display for EventName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventName {
    type Err = BridgeError;

    /// Parse an event name from its wire identifier. Case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| BridgeError::UnknownEvent {
                name: s.to_string(),
            })
    }
}
