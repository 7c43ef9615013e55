//! # Field Rules
//!
//! A [`FieldRule`] is the declarative unit of validation: one wire key, the
//! type its value must end up as, what to do when the key is absent or null,
//! and an optional format check. Event schemas are ordered slices of rules,
//! defined as `const` data and evaluated by the engine in [`crate::engine`].
//!
//! ## Null Handling
//!
//! Null handling is chosen per field, never globally:
//!
//! | Presence   | absent          | `null`          | value   |
//! |------------|-----------------|-----------------|---------|
//! | `Required` | `MissingField`  | `MissingField`  | coerced |
//! | `Optional` | omitted         | omitted         | coerced |
//! | `Nullable` | omitted         | `null` kept     | coerced |
//! | `Default`  | fallback value  | fallback value  | coerced |

use mab_core::{Environment, HexColor};
use serde_json::Value;

/// Target type a field's value is coerced to.
#[derive(Debug, Clone, Copy)]
pub enum FieldType {
    /// A string. Numbers are converted to their decimal text; anything else
    /// is a type mismatch.
    Text,
    /// A JSON number, taken as given.
    Number,
    /// A JSON boolean, taken as given.
    Boolean,
    /// A nested object validated against its own ordered rule list.
    Object(&'static [FieldRule]),
}

impl FieldType {
    /// Name of the type as it appears in errors and schema listings.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Text => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Object(_) => "object",
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Source of a value substituted for an absent or null field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fallback {
    /// The host's current window width.
    WindowWidth,
}

impl Fallback {
    /// Read the fallback value from the environment.
    ///
    /// Called at most once per rule per parse, and only when needed.
    pub fn resolve(&self, env: &dyn Environment) -> Value {
        match self {
            Self::WindowWidth => Value::from(env.window_width()),
        }
    }

    fn describe(&self) -> &'static str {
        match self {
            Self::WindowWidth => "window width",
        }
    }
}

/// What a rule does when its key is absent or null.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Presence {
    /// Absent or null fails the parse.
    Required,
    /// Absent or null omits the key from the output.
    Optional,
    /// Absent omits the key; null is copied through as null.
    Nullable,
    /// Absent or null is replaced by the fallback value.
    Default(Fallback),
}

impl std::fmt::Display for Presence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Required => f.write_str("required"),
            Self::Optional => f.write_str("optional"),
            Self::Nullable => f.write_str("nullable"),
            Self::Default(fallback) => write!(f, "default({})", fallback.describe()),
        }
    }
}

/// Format check applied to a string value after coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// `#` followed by six hex digits.
    HexColor,
}

impl Format {
    /// Check `value` against the format, returning the failure reason.
    pub fn check(&self, value: &str) -> Result<(), String> {
        match self {
            Self::HexColor => HexColor::new(value).map(|_| ()).map_err(|e| e.to_string()),
        }
    }

    /// Short name used in schema listings.
    pub fn name(&self) -> &'static str {
        match self {
            Self::HexColor => "hex-color",
        }
    }
}

/// Validation and coercion rule for a single wire key.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    /// Wire name of the key (snake_case).
    pub key: &'static str,
    /// Target type.
    pub ty: FieldType,
    /// Absent/null policy.
    pub presence: Presence,
    /// Optional format check on the coerced string.
    pub format: Option<Format>,
}

impl FieldRule {
    /// A key that must be present and non-null.
    pub const fn required(key: &'static str, ty: FieldType) -> Self {
        Self::new(key, ty, Presence::Required)
    }

    /// A key whose absence or null value drops it from the output.
    pub const fn optional(key: &'static str, ty: FieldType) -> Self {
        Self::new(key, ty, Presence::Optional)
    }

    /// A key whose null value is preserved in the output.
    pub const fn nullable(key: &'static str, ty: FieldType) -> Self {
        Self::new(key, ty, Presence::Nullable)
    }

    /// A key that falls back to an environment value when absent or null.
    pub const fn defaulted(key: &'static str, ty: FieldType, fallback: Fallback) -> Self {
        Self::new(key, ty, Presence::Default(fallback))
    }

    const fn new(key: &'static str, ty: FieldType, presence: Presence) -> Self {
        Self {
            key,
            ty,
            presence,
            format: None,
        }
    }

    /// Attach a format check.
    pub const fn with_format(self, format: Format) -> Self {
        Self {
            format: Some(format),
            ..self
        }
    }
}

impl std::fmt::Display for FieldRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} ({})", self.key, self.ty, self.presence)?;
        if let Some(format) = self.format {
            write!(f, " [{}]", format.name())?;
        }
        Ok(())
    }
}
