//! # mab-schema — Event Schemas & Coercion Engine
//!
//! The contract boundary between untrusted host messages and the mini-app's
//! typed API. Every host event has a declarative rule table; one generic
//! engine evaluates those tables against incoming payloads.
//!
//! ## Parsing (`engine`)
//!
//! - [`parse`]: `(event name, raw payload, environment) -> ParsedEvent`.
//!   Fail-fast: the first violated rule is the error, and no partial result
//!   is ever returned.
//! - [`BridgeEvent::parse`]: the same, decoded into a typed payload.
//!
//! ## Rules (`rule`, `schemas`)
//!
//! Rules are data: a wire key, a target type, a presence policy
//! (`Required | Optional | Nullable | Default`) and an optional format
//! check. Null handling is chosen per field; `clipboard-text-received`
//! keeps a null `data` while `popup-closed` drops a null `button_id`.
//!
//! ## Registry (`registry`)
//!
//! [`SchemaRegistry::global`] is built once and shared read-only.
//!
//! ## Crate Policy
//!
//! - Depends only on `mab-core` internally.
//! - No I/O. The only host state read is through the caller's `Environment`.
//! - Keys not declared by a schema never appear in its output.

#![forbid(unsafe_code)]

pub mod engine;
pub mod event_name;
pub mod parsed;
pub mod payload;
pub mod registry;
pub mod rule;
pub mod schemas;

pub use engine::parse;
pub use event_name::{EventName, EVENT_COUNT};
pub use parsed::ParsedEvent;
pub use payload::{
    BridgeEvent, ClipboardTextReceived, InvoiceClosed, PopupClosed, QrTextReceived, ThemeChanged,
    ThemeParams, ViewportChanged,
};
pub use registry::{EventSchema, SchemaRegistry};
pub use rule::{Fallback, FieldRule, FieldType, Format, Presence};
