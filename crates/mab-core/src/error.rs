//! # Error Types — Bridge Failure Taxonomy
//!
//! Defines the single error type raised at the bridge's trust boundary.
//! All variants use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! - Every failure names the dotted field path it was raised at
//!   (`theme_params.bg_color`), or `(root)` for the payload itself.
//! - Type failures carry the expected type and a description of the value
//!   actually received.
//! - Exactly one error is reported per parse: the first violated rule.

use serde_json::Value;
use thiserror::Error;

/// Failure produced while normalizing or validating a host event payload.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// A string payload could not be decoded as JSON.
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// No schema is registered for the event name.
    #[error("unknown event: {name:?}")]
    UnknownEvent {
        /// The event name as supplied by the caller.
        name: String,
    },

    /// A required key was absent, or null where null is not permitted.
    #[error("missing field: {field}")]
    MissingField {
        /// Dotted path of the missing key.
        field: String,
    },

    /// A value could not be coerced to the field's target type.
    #[error("type mismatch at {field}: expected {expected}, got {actual}")]
    TypeMismatch {
        /// Dotted path of the offending key, `(root)` for the payload itself.
        field: String,
        /// Name of the target type.
        expected: &'static str,
        /// JSON kind of the value that was received.
        actual: &'static str,
    },

    /// A value had the right type but failed a format validator.
    #[error("invalid format at {field}: {reason}")]
    InvalidFormat {
        /// Dotted path of the offending key.
        field: String,
        /// Human-readable description of the violated format.
        reason: String,
    },

    /// A validated payload did not decode into its event's typed payload.
    ///
    /// Indicates a schema table and its payload type disagree; host input
    /// alone cannot produce it.
    #[error("payload for {event} does not match its typed form: {reason}")]
    PayloadMismatch {
        /// Wire name of the event.
        event: String,
        /// Decoder message.
        reason: String,
    },
}

impl BridgeError {
    /// Build a `TypeMismatch` for `value` at `field`.
    pub fn type_mismatch(field: impl Into<String>, expected: &'static str, value: &Value) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            expected,
            actual: json_kind(value),
        }
    }

    /// The dotted field path this error was raised at, if it has one.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingField { field }
            | Self::TypeMismatch { field, .. }
            | Self::InvalidFormat { field, .. } => Some(field),
            Self::InvalidJson(_) | Self::UnknownEvent { .. } | Self::PayloadMismatch { .. } => None,
        }
    }

    /// Short stable identifier for the failure class, suitable for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidJson(_) => "invalid_json",
            Self::UnknownEvent { .. } => "unknown_event",
            Self::MissingField { .. } => "missing_field",
            Self::TypeMismatch { .. } => "type_mismatch",
            Self::InvalidFormat { .. } => "invalid_format",
            Self::PayloadMismatch { .. } => "payload_mismatch",
        }
    }
}

/// A string that is not a `#rrggbb` color.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("expected a color in #rrggbb form, got {0:?}")]
pub struct InvalidHexColor(pub String);

/// Name of the JSON kind of `value`, as used in error messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_type_mismatch_describes_actual_kind() {
        let err = BridgeError::type_mismatch("height", "number", &json!("tall"));
        assert_eq!(err.to_string(), "type mismatch at height: expected number, got string");
        assert_eq!(err.field(), Some("height"));
        assert_eq!(err.kind(), "type_mismatch");
    }

    #[test]
    fn test_unknown_event_has_no_field() {
        let err = BridgeError::UnknownEvent {
            name: "main-button-pressed".to_string(),
        };
        assert!(err.field().is_none());
        assert!(err.to_string().contains("main-button-pressed"));
    }

    #[test]
    fn test_invalid_json_from_serde_error() {
        let serde_err = serde_json::from_str::<Value>("{").unwrap_err();
        let err: BridgeError = serde_err.into();
        assert_eq!(err.kind(), "invalid_json");
        assert!(err.to_string().starts_with("invalid JSON payload"));
    }

    #[test]
    fn test_payload_mismatch_is_not_a_json_error() {
        let err = BridgeError::PayloadMismatch {
            event: "invoice-closed".to_string(),
            reason: "missing field `status`".to_string(),
        };
        assert_eq!(err.kind(), "payload_mismatch");
        assert!(err.field().is_none());
        assert!(err.to_string().contains("invoice-closed"));
    }

    #[test]
    fn test_json_kind_covers_all_variants() {
        assert_eq!(json_kind(&Value::Null), "null");
        assert_eq!(json_kind(&json!(true)), "boolean");
        assert_eq!(json_kind(&json!(1)), "number");
        assert_eq!(json_kind(&json!("x")), "string");
        assert_eq!(json_kind(&json!([])), "array");
        assert_eq!(json_kind(&json!({})), "object");
    }
}
