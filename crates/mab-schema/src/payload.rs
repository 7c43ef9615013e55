//! # Typed Event Payloads
//!
//! Strongly typed views of each event, decoded from a [`ParsedEvent`]
//! after the schema engine has validated and coerced it. Application code
//! should match on [`BridgeEvent`] rather than read raw JSON keys.
//!
//! Decoding a `ParsedEvent` into these types cannot fail for payloads the
//! engine produced; a failure there means a schema and its payload type
//! disagree, and is reported as [`BridgeError::PayloadMismatch`].

use mab_core::{BridgeError, Environment, HexColor, RawEvent};
use serde::{Deserialize, Deserializer, Serialize};

use crate::engine;
use crate::event_name::EventName;
use crate::parsed::ParsedEvent;

/// Host color palette. Every color is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_text_color: Option<HexColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<HexColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_color: Option<HexColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_text_color: Option<HexColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destructive_text_color: Option<HexColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_bg_color: Option<HexColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint_color: Option<HexColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_color: Option<HexColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_bg_color: Option<HexColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_bg_color: Option<HexColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_header_text_color: Option<HexColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle_text_color: Option<HexColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<HexColor>,
}

/// `theme-changed`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeChanged {
    pub theme_params: ThemeParams,
}

/// `viewport-changed`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewportChanged {
    pub height: f64,
    /// Reported width, or the host window width when the host omitted it.
    pub width: f64,
    pub is_state_stable: bool,
    pub is_expanded: bool,
}

/// `popup-closed`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopupClosed {
    /// Identifier of the pressed button. `None` when the popup was dismissed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_id: Option<String>,
}

/// `qr-text-received`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrTextReceived {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

/// `invoice-closed`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceClosed {
    pub slug: String,
    pub status: String,
}

/// `clipboard-text-received`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipboardTextReceived {
    /// Identifier of the read request this answers.
    pub req_id: String,
    /// `None`: key absent. `Some(None)`: host sent null. `Some(Some(_))`: text.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub data: Option<Option<String>>,
}

/// Wrap a present value (including null) in `Some`, leaving absence to
/// `#[serde(default)]`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// A validated host event.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", content = "payload", rename_all = "kebab-case")]
pub enum BridgeEvent {
    ThemeChanged(ThemeChanged),
    ViewportChanged(ViewportChanged),
    PopupClosed(PopupClosed),
    QrTextReceived(QrTextReceived),
    InvoiceClosed(InvoiceClosed),
    ClipboardTextReceived(ClipboardTextReceived),
}

impl BridgeEvent {
    /// Parse and type a host payload in one step, using the global registry.
    ///
    /// # Errors
    ///
    /// Returns the first schema violation; see [`engine::parse`].
    pub fn parse<'a>(
        event: &str,
        raw: impl Into<RawEvent<'a>>,
        env: &dyn Environment,
    ) -> Result<Self, BridgeError> {
        Self::from_parsed(engine::parse(event, raw, env)?)
    }

    /// Type an already-validated payload.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::PayloadMismatch`] if the payload does not
    /// decode into the event's payload type.
    pub fn from_parsed(parsed: ParsedEvent) -> Result<Self, BridgeError> {
        let event = parsed.event();
        let value = parsed.into_value();
        let mismatch = |e: serde_json::Error| BridgeError::PayloadMismatch {
            event: event.to_string(),
            reason: e.to_string(),
        };
        let typed = match event {
            EventName::ThemeChanged => {
                Self::ThemeChanged(serde_json::from_value(value).map_err(mismatch)?)
            }
            EventName::ViewportChanged => {
                Self::ViewportChanged(serde_json::from_value(value).map_err(mismatch)?)
            }
            EventName::PopupClosed => {
                Self::PopupClosed(serde_json::from_value(value).map_err(mismatch)?)
            }
            EventName::QrTextReceived => {
                Self::QrTextReceived(serde_json::from_value(value).map_err(mismatch)?)
            }
            EventName::InvoiceClosed => {
                Self::InvoiceClosed(serde_json::from_value(value).map_err(mismatch)?)
            }
            EventName::ClipboardTextReceived => {
                Self::ClipboardTextReceived(serde_json::from_value(value).map_err(mismatch)?)
            }
        };
        Ok(typed)
    }

    /// The event name of this payload.
    pub fn name(&self) -> EventName {
        match self {
            Self::ThemeChanged(_) => EventName::ThemeChanged,
            Self::ViewportChanged(_) => EventName::ViewportChanged,
            Self::PopupClosed(_) => EventName::PopupClosed,
            Self::QrTextReceived(_) => EventName::QrTextReceived,
            Self::InvoiceClosed(_) => EventName::InvoiceClosed,
            Self::ClipboardTextReceived(_) => EventName::ClipboardTextReceived,
        }
    }
}
