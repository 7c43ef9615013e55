//! # Hex Colors
//!
//! Theme colors travel over the bridge as `#rrggbb` strings. `HexColor` is
//! the validated form: a value of this type always holds `#` followed by
//! exactly six ASCII hex digits. Letter case is preserved as received.

use serde::{Deserialize, Serialize};

use crate::error::InvalidHexColor;

/// A `#rrggbb` color string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct HexColor(String);

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

impl HexColor {
    /// Create a color from a string, validating the `#rrggbb` format.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHexColor`] if the string is not `#` followed by
    /// exactly six hex digits.
    pub fn new(value: impl Into<String>) -> Result<Self, InvalidHexColor> {
        let s = value.into();
        if !is_hex_color(&s) {
            return Err(InvalidHexColor(s));
        }
        Ok(Self(s))
    }

    /// Access the color string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for HexColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether `s` is `#` followed by exactly six ASCII hex digits.
pub fn is_hex_color(s: &str) -> bool {
    match s.strip_prefix('#') {
        Some(digits) => digits.len() == 6 && digits.bytes().all(|b| b.is_ascii_hexdigit()),
        None => false,
    }
}
