//! Terminal input module (driver-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`tui_boulders_types::Command`] values the
//! core can queue. Collecting events and deciding when a step runs stays
//! with the driver loop.

pub mod map;

pub use tui_boulders_types as types;

pub use map::{handle_key_event, should_quit};
