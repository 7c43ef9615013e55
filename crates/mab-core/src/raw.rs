//! # Raw Input Normalization
//!
//! Hosts deliver event payloads either as JSON-encoded strings or as
//! already-decoded objects. This module collapses both shapes into a single
//! borrowed-or-owned JSON object so the schema engine sees one input form.
//!
//! ## Rules
//!
//! 1. A string payload is decoded as JSON. Malformed JSON fails with
//!    [`BridgeError::InvalidJson`].
//! 2. An object payload passes through unchanged and is not copied.
//! 3. Anything that is not (or does not decode to) an object fails with
//!    [`BridgeError::TypeMismatch`] at the payload root.
//!
//! Normalization has no side effects.

use std::borrow::Cow;

use serde_json::{Map, Value};

use crate::error::BridgeError;

/// Field path used for failures that concern the payload as a whole.
pub const ROOT_FIELD: &str = "(root)";

/// A payload exactly as it arrived from the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawEvent<'a> {
    /// JSON-encoded text.
    Json(&'a str),
    /// An already-decoded JSON value. A string value is treated as JSON text.
    Value(&'a Value),
    /// An already-decoded keyed mapping.
    Object(&'a Map<String, Value>),
}

impl<'a> From<&'a str> for RawEvent<'a> {
    fn from(s: &'a str) -> Self {
        Self::Json(s)
    }
}

impl<'a> From<&'a String> for RawEvent<'a> {
    fn from(s: &'a String) -> Self {
        Self::Json(s.as_str())
    }
}

impl<'a> From<&'a Value> for RawEvent<'a> {
    fn from(v: &'a Value) -> Self {
        Self::Value(v)
    }
}

impl<'a> From<&'a Map<String, Value>> for RawEvent<'a> {
    fn from(m: &'a Map<String, Value>) -> Self {
        Self::Object(m)
    }
}

/// Normalize a raw payload into a JSON object.
///
/// Objects are borrowed; decoded JSON text is owned.
///
/// # Errors
///
/// Returns [`BridgeError::InvalidJson`] when string input is not valid JSON,
/// and [`BridgeError::TypeMismatch`] when the payload is not an object.
pub fn normalize<'a>(
    raw: impl Into<RawEvent<'a>>,
) -> Result<Cow<'a, Map<String, Value>>, BridgeError> {
    match raw.into() {
        RawEvent::Json(text) => decode_object(text).map(Cow::Owned),
        RawEvent::Value(Value::String(text)) => decode_object(text).map(Cow::Owned),
        RawEvent::Value(Value::Object(map)) => Ok(Cow::Borrowed(map)),
        RawEvent::Value(other) => Err(BridgeError::type_mismatch(ROOT_FIELD, "object", other)),
        RawEvent::Object(map) => Ok(Cow::Borrowed(map)),
    }
}

fn decode_object(text: &str) -> Result<Map<String, Value>, BridgeError> {
    match serde_json::from_str::<Value>(text)? {
        Value::Object(map) => Ok(map),
        other => Err(BridgeError::type_mismatch(ROOT_FIELD, "object", &other)),
    }
}
