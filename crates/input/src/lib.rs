//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and provides the
//! quit probe. Actions are edge-triggered: callers feed one action per key
//! press event and ignore repeat/release event kinds.

pub mod map;

pub use gridfall_types as types;

pub use map::{map_key, should_quit};
