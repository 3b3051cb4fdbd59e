//! Game state module - the owned aggregate an external driver ticks
//!
//! `GameState` bundles the grid with the per-step command queue. The queue
//! is drained as a stack: the most recently queued command resolves first.
//! That ordering is load-bearing for existing level solutions and is covered
//! by tests (see DESIGN.md for the rationale).

use arrayvec::ArrayVec;

use tui_boulders_types::{Command, MAX_QUEUED_COMMANDS};

use crate::grid::Grid;
use crate::level::{self, LevelError};
use crate::{gravity, movement};

/// One running simulation: a grid plus the commands buffered for the next
/// step. Single-threaded by construction; the driver owns it exclusively.
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    commands: ArrayVec<Command, MAX_QUEUED_COMMANDS>,
}

impl GameState {
    /// Load a level encoding and start a game on it.
    pub fn load<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, LevelError> {
        Ok(Self {
            grid: level::load(rows)?,
            commands: ArrayVec::new(),
        })
    }

    /// Buffer a command for the next step. Commands beyond the queue bound
    /// are dropped.
    pub fn enqueue(&mut self, command: Command) {
        let _ = self.commands.try_push(command);
    }

    /// Advance one simulation step: drain every queued command (last queued
    /// first, each fully resolved before the next), then run one gravity
    /// pass.
    pub fn step(&mut self) {
        while let Some(command) = self.commands.pop() {
            movement::resolve(&mut self.grid, command);
        }
        gravity::settle(&mut self.grid);
    }

    /// Read-only view of the grid for rendering and inspection.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current player coordinates.
    pub fn player(&self) -> (usize, usize) {
        self.grid.player()
    }
}
