//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Coordinates
//!
//! Grid positions are `(x, y)` with `x` growing left to right and `y` growing
//! top to bottom; row 0 is the top row. Level dimensions are fixed at load
//! time and every shipped level carries a solid `Unbreakable` border.
//!
//! # Level encoding
//!
//! Levels are rectangular tables of small integer codes, row-major, top row
//! first. Codes map 1:1 onto [`Tile`] variants (falling state included):
//!
//! | Code | Tile |
//! |------|------|
//! | 0 | Air |
//! | 1 | Flux |
//! | 2 | Unbreakable |
//! | 3 | Player |
//! | 4 | Stone (resting) |
//! | 5 | Stone (falling) |
//! | 6 | Box (resting) |
//! | 7 | Box (falling) |
//! | 8 | Key1 |
//! | 9 | Lock1 |
//! | 10 | Key2 |
//! | 11 | Lock2 |
//!
//! # Examples
//!
//! ```
//! use tui_boulders_types::{Command, FallingState, Tile};
//!
//! let stone = Tile::from_code(4).unwrap();
//! assert_eq!(stone, Tile::Stone(FallingState::Resting));
//! assert!(stone.can_fall());
//! assert_eq!(stone.code(), 4);
//!
//! assert_eq!(Command::MoveLeft.delta(), (-1, 0));
//! ```

/// Fixed timestep interval in milliseconds (33ms ≈ 30 steps per second)
pub const TICK_MS: u32 = 33;

/// Upper bound on commands buffered between two simulation steps.
///
/// Commands arriving while the queue is full are dropped.
pub const MAX_QUEUED_COMMANDS: usize = 32;

/// Whether a loose tile (stone or box) is currently supported.
///
/// A `Falling` tile is mid-drop this tick and cannot be pushed; a `Resting`
/// tile sits on support and accepts horizontal pushes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FallingState {
    Resting,
    Falling,
}

impl FallingState {
    pub fn is_falling(self) -> bool {
        matches!(self, FallingState::Falling)
    }
}

/// The closed set of cell contents.
///
/// Tiles are plain values: relocating one means writing the variant (with its
/// falling state) into the destination cell and writing [`Tile::Air`] into
/// the source. Exactly one cell holds [`Tile::Player`] after a successful
/// level load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    /// Empty space; walkable, lets loose tiles through.
    Air,
    /// Walkable decoration.
    Flux,
    /// Immovable wall; also forms the level border.
    Unbreakable,
    /// The player marker cell.
    Player,
    /// Heavy rock subject to gravity; pushable while resting.
    Stone(FallingState),
    /// Wooden crate subject to gravity; pushable while resting.
    Box(FallingState),
    /// Picking this up removes every `Lock1` on the grid.
    Key1,
    Lock1,
    /// Picking this up removes every `Lock2` on the grid.
    Key2,
    Lock2,
}

impl Tile {
    /// Decode a raw level code. Returns `None` for unrecognized codes.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Tile::Air),
            1 => Some(Tile::Flux),
            2 => Some(Tile::Unbreakable),
            3 => Some(Tile::Player),
            4 => Some(Tile::Stone(FallingState::Resting)),
            5 => Some(Tile::Stone(FallingState::Falling)),
            6 => Some(Tile::Box(FallingState::Resting)),
            7 => Some(Tile::Box(FallingState::Falling)),
            8 => Some(Tile::Key1),
            9 => Some(Tile::Lock1),
            10 => Some(Tile::Key2),
            11 => Some(Tile::Lock2),
            _ => None,
        }
    }

    /// Encode back to the raw level code. Inverse of [`Tile::from_code`].
    pub fn code(self) -> u8 {
        match self {
            Tile::Air => 0,
            Tile::Flux => 1,
            Tile::Unbreakable => 2,
            Tile::Player => 3,
            Tile::Stone(FallingState::Resting) => 4,
            Tile::Stone(FallingState::Falling) => 5,
            Tile::Box(FallingState::Resting) => 6,
            Tile::Box(FallingState::Falling) => 7,
            Tile::Key1 => 8,
            Tile::Lock1 => 9,
            Tile::Key2 => 10,
            Tile::Lock2 => 11,
        }
    }

    pub fn is_air(self) -> bool {
        matches!(self, Tile::Air)
    }

    pub fn is_lock1(self) -> bool {
        matches!(self, Tile::Lock1)
    }

    pub fn is_lock2(self) -> bool {
        matches!(self, Tile::Lock2)
    }

    /// Whether gravity applies to this tile (stones and boxes only).
    pub fn can_fall(self) -> bool {
        matches!(self, Tile::Stone(_) | Tile::Box(_))
    }

    /// The falling state carried by a stone or box, `None` otherwise.
    pub fn falling(self) -> Option<FallingState> {
        match self {
            Tile::Stone(state) | Tile::Box(state) => Some(state),
            _ => None,
        }
    }

    /// Replace the falling state on a stone or box; identity for other tiles.
    pub fn with_falling(self, state: FallingState) -> Self {
        match self {
            Tile::Stone(_) => Tile::Stone(state),
            Tile::Box(_) => Tile::Box(state),
            other => other,
        }
    }
}

/// Player movement commands.
///
/// Produced by the input adapter and buffered on the game's command queue;
/// the queue drains once per simulation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
}

impl Command {
    /// The `(dx, dy)` cell offset this command targets.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Command::MoveLeft => (-1, 0),
            Command::MoveRight => (1, 0),
            Command::MoveUp => (0, -1),
            Command::MoveDown => (0, 1),
        }
    }
}
