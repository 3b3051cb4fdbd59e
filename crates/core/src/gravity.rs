//! Gravity module - the once-per-tick fall pass
//!
//! Rows are visited bottom-to-top, columns left-to-right. A tile that falls
//! from row `y` lands in row `y + 1`, which this traversal has already
//! visited, so no tile is ever updated twice in one tick. Cells vacated by a
//! fall earlier in the same pass do not count as open until the next tick,
//! so a stacked column advances at most one tile per tick and a fall never
//! cascades through multiple rows in a single step.

use tui_boulders_types::{FallingState, Tile};

use crate::grid::Grid;

/// Apply one gravity pass to every loose tile on the grid.
pub fn settle(grid: &mut Grid) {
    let width = grid.width();
    // Marks cells a tile left during this pass; the tile above such a cell
    // stays put until the next tick.
    let mut vacated = vec![false; width * grid.height()];

    for y in (0..grid.height()).rev() {
        for x in 0..width {
            update_tile(grid, &mut vacated, x, y);
        }
    }
}

/// Advance the falling-state machine for the tile at `(x, y)`:
///
/// 1. open air below: mark falling and relocate one row down;
/// 2. no air below but the tile was falling: it just landed, mark resting;
/// 3. otherwise leave it alone.
fn update_tile(grid: &mut Grid, vacated: &mut [bool], x: usize, y: usize) {
    let tile = grid.get(x, y);
    let Some(state) = tile.falling() else {
        return;
    };

    let below_is_air = y + 1 < grid.height() && grid.get(x, y + 1).is_air();
    if below_is_air {
        if !vacated[(y + 1) * grid.width() + x] {
            grid.set(x, y + 1, tile.with_falling(FallingState::Falling));
            grid.set(x, y, Tile::Air);
            vacated[y * grid.width() + x] = true;
        }
        // Air below that only opened up this pass: wait for the next tick.
    } else if state.is_falling() {
        grid.set(x, y, tile.with_falling(FallingState::Resting));
    }
}
