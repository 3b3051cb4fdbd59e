//! Core simulation module - pure, deterministic, and testable
//!
//! This module contains the whole grid state machine: level loading, movement
//! resolution, gravity, and lock removal. It has **zero dependencies** on UI,
//! timing, or I/O, making it:
//!
//! - **Deterministic**: the same level and command sequence always produce
//!   the same grid
//! - **Testable**: every rule is exercised by unit and integration tests
//! - **Portable**: can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: the tile container with cached player coordinates
//! - [`level`]: raw-code decoding and load-time validation
//! - [`movement`]: command dispatch, pushes, and the lock-removal sweep
//! - [`gravity`]: the once-per-tick bottom-to-top gravity pass
//! - [`game_state`]: the owned aggregate driven by an external tick loop
//!
//! # Simulation step
//!
//! One step is: drain the queued commands (most recently queued first), fully
//! resolving each one, then apply a single gravity pass. The external driver
//! decides the cadence; the core never schedules itself.
//!
//! # Example
//!
//! ```
//! use tui_boulders_core::GameState;
//! use tui_boulders_types::Command;
//!
//! let mut game = GameState::load(tui_boulders_core::DEFAULT_LEVEL).unwrap();
//! assert_eq!(game.player(), (1, 1));
//!
//! game.enqueue(Command::MoveRight);
//! game.step();
//! ```

pub mod game_state;
pub mod gravity;
pub mod grid;
pub mod level;
pub mod movement;

pub use tui_boulders_types as types;

// Re-export commonly used items for convenience
pub use game_state::GameState;
pub use grid::Grid;
pub use level::{LevelError, DEFAULT_LEVEL};
