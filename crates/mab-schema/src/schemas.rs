//! # Event Schemas
//!
//! Rule tables for every host event. Rules are evaluated in the order they
//! are declared here, so the first violated rule in this order is the one
//! reported.

use crate::rule::{Fallback, FieldRule, FieldType, Format};

const fn color(key: &'static str) -> FieldRule {
    FieldRule::optional(key, FieldType::Text).with_format(Format::HexColor)
}

/// Color keys of a `theme_params` object. All optional.
pub const THEME_PARAMS: &[FieldRule] = &[
    color("accent_text_color"),
    color("bg_color"),
    color("button_color"),
    color("button_text_color"),
    color("destructive_text_color"),
    color("header_bg_color"),
    color("hint_color"),
    color("link_color"),
    color("secondary_bg_color"),
    color("section_bg_color"),
    color("section_header_text_color"),
    color("subtitle_text_color"),
    color("text_color"),
];

/// `theme-changed`
pub const THEME_CHANGED: &[FieldRule] = &[FieldRule::required(
    "theme_params",
    FieldType::Object(THEME_PARAMS),
)];

/// `viewport-changed`
pub const VIEWPORT_CHANGED: &[FieldRule] = &[
    FieldRule::required("height", FieldType::Number),
    FieldRule::defaulted("width", FieldType::Number, Fallback::WindowWidth),
    FieldRule::required("is_state_stable", FieldType::Boolean),
    FieldRule::required("is_expanded", FieldType::Boolean),
];

/// `popup-closed`
pub const POPUP_CLOSED: &[FieldRule] = &[FieldRule::optional("button_id", FieldType::Text)];

/// `qr-text-received`
pub const QR_TEXT_RECEIVED: &[FieldRule] = &[FieldRule::optional("data", FieldType::Text)];

/// `invoice-closed`
pub const INVOICE_CLOSED: &[FieldRule] = &[
    FieldRule::required("slug", FieldType::Text),
    FieldRule::required("status", FieldType::Text),
];

/// `clipboard-text-received`
///
/// Unlike `popup-closed` and `qr-text-received`, a null `data` is kept.
pub const CLIPBOARD_TEXT_RECEIVED: &[FieldRule] = &[
    FieldRule::required("req_id", FieldType::Text),
    FieldRule::nullable("data", FieldType::Text),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Presence;
    use std::collections::HashSet;

    fn assert_unique_keys(rules: &[FieldRule]) {
        let mut seen = HashSet::new();
        for rule in rules {
            assert!(seen.insert(rule.key), "duplicate key {}", rule.key);
        }
    }

    #[test]
    fn test_keys_unique_per_schema() {
        for rules in [
            THEME_PARAMS,
            THEME_CHANGED,
            VIEWPORT_CHANGED,
            POPUP_CLOSED,
            QR_TEXT_RECEIVED,
            INVOICE_CLOSED,
            CLIPBOARD_TEXT_RECEIVED,
        ] {
            assert_unique_keys(rules);
        }
    }

    #[test]
    fn test_theme_params_all_optional_colors() {
        assert_eq!(THEME_PARAMS.len(), 13);
        for rule in THEME_PARAMS {
            assert_eq!(rule.presence, Presence::Optional, "{}", rule.key);
            assert_eq!(rule.format, Some(Format::HexColor), "{}", rule.key);
        }
    }

    #[test]
    fn test_null_policies_differ_per_field() {
        assert_eq!(POPUP_CLOSED[0].presence, Presence::Optional);
        assert_eq!(QR_TEXT_RECEIVED[0].presence, Presence::Optional);
        assert_eq!(CLIPBOARD_TEXT_RECEIVED[1].presence, Presence::Nullable);
    }
}
