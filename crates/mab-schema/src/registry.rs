//! # Schema Registry
//!
//! Maps event names to their rule tables. The registry is built once and is
//! read-only afterwards; the process-wide instance returned by
//! [`SchemaRegistry::global`] is initialised on first use and shared freely
//! across threads.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::event_name::EventName;
use crate::rule::{FieldRule, FieldType};
use crate::schemas;

/// An event name bound to its ordered rule list.
#[derive(Debug, Clone, Copy)]
pub struct EventSchema {
    name: EventName,
    rules: &'static [FieldRule],
}

impl EventSchema {
    /// Bind `rules` to `name`.
    pub const fn new(name: EventName, rules: &'static [FieldRule]) -> Self {
        Self { name, rules }
    }

    /// The event this schema validates.
    pub fn name(&self) -> EventName {
        self.name
    }

    /// Top-level rules in evaluation order.
    pub fn rules(&self) -> &'static [FieldRule] {
        self.rules
    }

    /// The schema for a known event.
    pub fn for_event(name: EventName) -> Self {
        let rules = match name {
            EventName::ThemeChanged => schemas::THEME_CHANGED,
            EventName::ViewportChanged => schemas::VIEWPORT_CHANGED,
            EventName::PopupClosed => schemas::POPUP_CLOSED,
            EventName::QrTextReceived => schemas::QR_TEXT_RECEIVED,
            EventName::InvoiceClosed => schemas::INVOICE_CLOSED,
            EventName::ClipboardTextReceived => schemas::CLIPBOARD_TEXT_RECEIVED,
        };
        Self::new(name, rules)
    }

    /// Render the rule tree, one rule per line, nested rules indented.
    pub fn describe(&self) -> String {
        let mut out = String::new();
        describe_rules(self.rules, 1, &mut out);
        out
    }
}

fn describe_rules(rules: &[FieldRule], depth: usize, out: &mut String) {
    for rule in rules {
        out.push_str(&"  ".repeat(depth));
        out.push_str(&rule.to_string());
        out.push('\n');
        if let FieldType::Object(nested) = rule.ty {
            describe_rules(nested, depth + 1, out);
        }
    }
}

/// Lookup table from wire event name to schema.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    schemas: BTreeMap<&'static str, EventSchema>,
}

static GLOBAL: OnceLock<SchemaRegistry> = OnceLock::new();

impl SchemaRegistry {
    /// Build a registry holding the schema of every known event.
    pub fn builtin() -> Self {
        let schemas = EventName::all()
            .iter()
            .map(|&name| (name.as_str(), EventSchema::for_event(name)))
            .collect();
        Self { schemas }
    }

    /// The shared process-wide registry.
    pub fn global() -> &'static SchemaRegistry {
        GLOBAL.get_or_init(Self::builtin)
    }

    /// Look up a schema by wire event name.
    pub fn get(&self, name: &str) -> Option<&EventSchema> {
        self.schemas.get(name)
    }

    /// Number of registered schemas.
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Returns true if no schemas are registered.
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Registered schemas, ordered by wire name.
    pub fn iter(&self) -> impl Iterator<Item = &EventSchema> {
        self.schemas.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event_name::EVENT_COUNT;

    #[test]
    fn test_builtin_covers_every_event() {
        let registry = SchemaRegistry::builtin();
        assert_eq!(registry.len(), EVENT_COUNT);
        for name in EventName::all() {
            let schema = registry.get(name.as_str()).expect("registered");
            assert_eq!(schema.name(), *name);
        }
    }

    #[test]
    fn test_unknown_name_not_found() {
        let registry = SchemaRegistry::global();
        assert!(registry.get("main-button-pressed").is_none());
        assert!(registry.get("ThemeChanged").is_none());
    }

    #[test]
    fn test_global_is_shared() {
        let a = SchemaRegistry::global() as *const SchemaRegistry;
        let b = SchemaRegistry::global() as *const SchemaRegistry;
        assert_eq!(a, b);
    }

    #[test]
    fn test_global_usable_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| SchemaRegistry::global().len()))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), EVENT_COUNT);
        }
    }

    #[test]
    fn test_iter_sorted_by_name() {
        let names: Vec<&str> = SchemaRegistry::global()
            .iter()
            .map(|s| s.name().as_str())
            .collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_describe_nests_theme_params() {
        let text = EventSchema::for_event(EventName::ThemeChanged).describe();
        assert!(text.starts_with("  theme_params: object (required)\n"));
        assert!(text.contains("\n    bg_color: string (optional) [hex-color]\n"));
    }
}
