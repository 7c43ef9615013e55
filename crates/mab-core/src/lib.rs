//! # mab-core — Foundational Types for the Mini-App Bridge
//!
//! This crate holds the primitives shared by every layer of the bridge
//! between a mini-app's web view and its native host. It depends on nothing
//! internal; the schema engine in `mab-schema` builds on it.
//!
//! ## Key Design Principles
//!
//! 1. **One input shape.** Host payloads arrive as JSON text or as decoded
//!    objects. [`normalize`] collapses both into a JSON object before any
//!    validation runs.
//!
//! 2. **Explicit environment.** Values that depend on live host state (the
//!    window width) are supplied through the [`Environment`] trait on every
//!    call. Nothing here reads ambient globals or caches host state.
//!
//! 3. **Validated newtypes.** [`HexColor`] can only hold a `#rrggbb` string.
//!
//! 4. **Single error taxonomy.** [`BridgeError`] covers every way a payload
//!    can be rejected, each variant naming the field it concerns.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `mab-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

#![forbid(unsafe_code)]

pub mod color;
pub mod environment;
pub mod error;
pub mod raw;

pub use color::{is_hex_color, HexColor};
pub use environment::{Environment, EnvironmentSnapshot, LiveEnvironment};
pub use error::{json_kind, BridgeError, InvalidHexColor};
pub use raw::{normalize, RawEvent, ROOT_FIELD};
