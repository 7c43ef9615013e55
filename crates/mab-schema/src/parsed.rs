//! # Parsed Events
//!
//! The output of a successful parse: the event name plus a JSON object that
//! holds only the keys the schema resolved, under their wire names.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::event_name::EventName;

/// A validated, coerced event payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedEvent {
    event: EventName,
    payload: Map<String, Value>,
}

impl ParsedEvent {
    pub(crate) fn new(event: EventName, payload: Map<String, Value>) -> Self {
        Self { event, payload }
    }

    /// The event this payload belongs to.
    pub fn event(&self) -> EventName {
        self.event
    }

    /// The resolved keys and values.
    pub fn payload(&self) -> &Map<String, Value> {
        &self.payload
    }

    /// Look up a resolved value by wire name.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.payload.get(key)
    }

    /// Whether `key` was resolved (a preserved `null` counts as resolved).
    pub fn contains_key(&self, key: &str) -> bool {
        self.payload.contains_key(key)
    }

    /// Number of resolved top-level keys.
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    /// Returns true if no keys were resolved.
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    /// Consume into the payload object.
    pub fn into_payload(self) -> Map<String, Value> {
        self.payload
    }

    /// Consume into a JSON value holding the payload object.
    pub fn into_value(self) -> Value {
        Value::Object(self.payload)
    }
}

impl PartialEq<Value> for ParsedEvent {
    fn eq(&self, other: &Value) -> bool {
        other.as_object() == Some(&self.payload)
    }
}
