//! # Coercion Engine
//!
//! Turns an untrusted host payload into a [`ParsedEvent`] by evaluating the
//! event's rule list against it.
//!
//! ## Evaluation
//!
//! 1. Normalize the raw payload (JSON text or object) into an object.
//! 2. Look up the schema for the event name.
//! 3. Evaluate rules strictly in declaration order. Nested object rules
//!    recurse into the same evaluator with a dotted path prefix.
//! 4. Stop at the first violated rule and return that error alone.
//!
//! The output contains only keys the schema declares. The environment is
//! consulted only when a `Default` rule finds its key absent or null.

use mab_core::{normalize, BridgeError, Environment, RawEvent};
use serde_json::{Map, Number, Value};

use crate::parsed::ParsedEvent;
use crate::registry::{EventSchema, SchemaRegistry};
use crate::rule::{FieldRule, FieldType, Presence};

/// Parse `raw` as the payload of `event` using the global registry.
///
/// # Errors
///
/// Returns the first [`BridgeError`] encountered; see
/// [`SchemaRegistry::parse`].
pub fn parse<'a>(
    event: &str,
    raw: impl Into<RawEvent<'a>>,
    env: &dyn Environment,
) -> Result<ParsedEvent, BridgeError> {
    SchemaRegistry::global().parse(event, raw, env)
}

impl SchemaRegistry {
    /// Parse `raw` as the payload of `event`.
    ///
    /// # Errors
    ///
    /// - [`BridgeError::InvalidJson`] if a string payload is not JSON.
    /// - [`BridgeError::TypeMismatch`] if the payload is not an object or a
    ///   value cannot be coerced.
    /// - [`BridgeError::UnknownEvent`] if no schema is registered.
    /// - [`BridgeError::MissingField`] for an absent or null required key.
    /// - [`BridgeError::InvalidFormat`] for a value failing its format check.
    pub fn parse<'a>(
        &self,
        event: &str,
        raw: impl Into<RawEvent<'a>>,
        env: &dyn Environment,
    ) -> Result<ParsedEvent, BridgeError> {
        let result = normalize(raw).and_then(|input| {
            let schema = self.get(event).ok_or_else(|| BridgeError::UnknownEvent {
                name: event.to_string(),
            })?;
            schema.evaluate(&input, env)
        });

        match &result {
            Ok(parsed) => {
                tracing::debug!(event, fields = parsed.len(), "event payload accepted");
            }
            Err(e) => {
                tracing::debug!(event, kind = e.kind(), error = %e, "event payload rejected");
            }
        }
        result
    }
}

impl EventSchema {
    /// Evaluate this schema against an already-normalized object.
    ///
    /// # Errors
    ///
    /// Returns the first rule violation.
    pub fn evaluate(
        &self,
        input: &Map<String, Value>,
        env: &dyn Environment,
    ) -> Result<ParsedEvent, BridgeError> {
        let payload = evaluate_rules(self.rules(), input, None, env)?;
        Ok(ParsedEvent::new(self.name(), payload))
    }
}

fn evaluate_rules(
    rules: &[FieldRule],
    input: &Map<String, Value>,
    prefix: Option<&str>,
    env: &dyn Environment,
) -> Result<Map<String, Value>, BridgeError> {
    let mut out = Map::new();
    for rule in rules {
        let path = match prefix {
            Some(p) => format!("{p}.{}", rule.key),
            None => rule.key.to_string(),
        };
        if let Some(value) = evaluate_rule(rule, input.get(rule.key), &path, env)? {
            out.insert(rule.key.to_string(), value);
        }
    }
    Ok(out)
}

/// Resolve one rule. `Ok(None)` means the key is omitted from the output.
fn evaluate_rule(
    rule: &FieldRule,
    value: Option<&Value>,
    path: &str,
    env: &dyn Environment,
) -> Result<Option<Value>, BridgeError> {
    match value {
        None | Some(Value::Null) => match rule.presence {
            Presence::Required => Err(BridgeError::MissingField {
                field: path.to_string(),
            }),
            Presence::Optional => Ok(None),
            Presence::Nullable => Ok(value.cloned()),
            Presence::Default(fallback) => Ok(Some(fallback.resolve(env))),
        },
        Some(v) => coerce(rule, v, path, env).map(Some),
    }
}

fn coerce(
    rule: &FieldRule,
    value: &Value,
    path: &str,
    env: &dyn Environment,
) -> Result<Value, BridgeError> {
    let coerced = match (rule.ty, value) {
        (FieldType::Text, Value::String(_)) => value.clone(),
        (FieldType::Text, Value::Number(n)) => Value::String(number_text(n)),
        (FieldType::Number, Value::Number(_)) => value.clone(),
        (FieldType::Boolean, Value::Bool(_)) => value.clone(),
        (FieldType::Object(rules), Value::Object(nested)) => {
            Value::Object(evaluate_rules(rules, nested, Some(path), env)?)
        }
        (ty, other) => return Err(BridgeError::type_mismatch(path, ty.name(), other)),
    };

    if let (Some(format), Value::String(s)) = (rule.format, &coerced) {
        format
            .check(s)
            .map_err(|reason| BridgeError::InvalidFormat {
                field: path.to_string(),
                reason,
            })?;
    }
    Ok(coerced)
}

/// Largest integer an IEEE-754 double represents exactly (2^53 - 1).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Decimal text for a JSON number. Integral floats such as `100.0` and `-0`
/// render without a fractional part.
fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER => {
            (f as i64).to_string()
        }
        _ => n.to_string(),
    }
}
