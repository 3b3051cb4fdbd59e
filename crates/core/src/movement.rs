//! Movement module - resolves one command against the grid
//!
//! A command targets the cell adjacent to the player in the requested
//! direction; what happens is decided by an exhaustive match on that cell's
//! tile. Illegal moves (walls, locks, failed pushes) are defined no-ops, not
//! errors: the grid is simply left untouched.

use tui_boulders_types::{Command, FallingState, Tile};

use crate::grid::Grid;

/// Apply one command to the grid. Fully resolves any side effect it
/// triggers (player relocation, push, lock sweep) before returning.
pub fn resolve(grid: &mut Grid, command: Command) {
    let (dx, dy) = command.delta();
    let (px, py) = grid.player();
    let tx = shifted(px, dx);
    let ty = shifted(py, dy);

    match grid.get(tx, ty) {
        Tile::Air | Tile::Flux => grid.move_player_to(tx, ty),
        // The sweep runs before the relocation, so a lock vacated by this
        // pickup already reads as air to anything later in the same step.
        Tile::Key1 => {
            grid.remove_matching(Tile::is_lock1);
            grid.move_player_to(tx, ty);
        }
        Tile::Key2 => {
            grid.remove_matching(Tile::is_lock2);
            grid.move_player_to(tx, ty);
        }
        tile @ (Tile::Stone(_) | Tile::Box(_)) => {
            // Loose tiles only respond to horizontal pushes.
            if dy == 0 {
                try_push(grid, tile, dx);
            }
        }
        Tile::Unbreakable | Tile::Lock1 | Tile::Lock2 | Tile::Player => {}
    }
}

/// Push the loose tile adjacent to the player at offset `dx`.
///
/// Succeeds iff the tile is resting, the cell two columns over is air, and
/// the destination has floor support (the cell below it is not air). The
/// tile relocates first, then the player steps into the vacated cell; no
/// intermediate state is observable.
fn try_push(grid: &mut Grid, tile: Tile, dx: isize) {
    if tile.falling() == Some(FallingState::Falling) {
        return;
    }

    let (px, py) = grid.player();
    let step_x = shifted(px, dx);
    let dest_x = shifted(px, dx + dx);

    if grid.get(dest_x, py).is_air() && !grid.get(step_x, py + 1).is_air() {
        grid.set(dest_x, py, tile);
        grid.move_player_to(step_x, py);
    }
}

/// Offset a coordinate by a signed delta. A result outside the grid trips
/// the grid accessor's bounds assert, which is the intended fatal outcome
/// for a border breach.
fn shifted(coord: usize, delta: isize) -> usize {
    coord.wrapping_add_signed(delta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level;

    #[test]
    fn walking_into_air_and_flux_relocates_the_player() {
        let mut grid = level::load(&[[2, 2, 2, 2, 2], [2, 3, 0, 1, 2], [2, 2, 2, 2, 2]]).unwrap();

        resolve(&mut grid, Command::MoveRight);
        assert_eq!(grid.player(), (2, 1));
        assert_eq!(grid.get(1, 1), Tile::Air);

        resolve(&mut grid, Command::MoveRight);
        assert_eq!(grid.player(), (3, 1));
        // Flux is consumed by walking onto it.
        assert_eq!(grid.get(3, 1), Tile::Player);
    }

    #[test]
    fn walls_and_locks_block_movement() {
        let mut grid = level::load(&[[2, 2, 2, 2], [2, 9, 3, 2], [2, 2, 2, 2]]).unwrap();

        resolve(&mut grid, Command::MoveLeft);
        assert_eq!(grid.player(), (2, 1));
        resolve(&mut grid, Command::MoveRight);
        assert_eq!(grid.player(), (2, 1));
        resolve(&mut grid, Command::MoveUp);
        assert_eq!(grid.player(), (2, 1));
        resolve(&mut grid, Command::MoveDown);
        assert_eq!(grid.player(), (2, 1));
    }

    #[test]
    fn vertical_push_on_a_box_is_a_no_op() {
        let mut grid = level::load(&[[2, 2, 2], [2, 3, 2], [2, 6, 2], [2, 2, 2]]).unwrap();

        resolve(&mut grid, Command::MoveDown);
        assert_eq!(grid.player(), (1, 1));
        assert_eq!(grid.get(1, 2), Tile::Box(FallingState::Resting));
    }

    #[test]
    fn falling_tiles_cannot_be_pushed() {
        // Falling stone (code 5) right of the player with room beyond it.
        let mut grid =
            level::load(&[[2, 2, 2, 2, 2], [2, 3, 5, 0, 2], [2, 2, 2, 2, 2]]).unwrap();

        resolve(&mut grid, Command::MoveRight);
        assert_eq!(grid.player(), (1, 1));
        assert_eq!(grid.get(2, 1), Tile::Stone(FallingState::Falling));
    }

    #[test]
    fn push_requires_air_beyond_and_support_below() {
        // Supported: box relocates and player follows.
        let mut grid =
            level::load(&[[2, 2, 2, 2, 2], [2, 3, 6, 0, 2], [2, 2, 2, 2, 2]]).unwrap();
        resolve(&mut grid, Command::MoveRight);
        assert_eq!(grid.player(), (2, 1));
        assert_eq!(grid.get(3, 1), Tile::Box(FallingState::Resting));

        // Blocked beyond: nothing moves.
        let mut grid =
            level::load(&[[2, 2, 2, 2, 2], [2, 3, 6, 4, 2], [2, 2, 2, 2, 2]]).unwrap();
        resolve(&mut grid, Command::MoveRight);
        assert_eq!(grid.player(), (1, 1));
        assert_eq!(grid.get(2, 1), Tile::Box(FallingState::Resting));

        // Unsupported destination: the cell under the box's landing spot is
        // air, so the push is refused.
        let mut grid = level::load(&[
            [2, 2, 2, 2, 2],
            [2, 3, 4, 0, 2],
            [2, 2, 0, 0, 2],
            [2, 2, 2, 2, 2],
        ])
        .unwrap();
        resolve(&mut grid, Command::MoveRight);
        assert_eq!(grid.player(), (1, 1));
        assert_eq!(grid.get(2, 1), Tile::Stone(FallingState::Resting));
    }

    #[test]
    fn key_pickup_sweeps_matching_locks_only() {
        let mut grid = level::load(&[
            [2, 2, 2, 2, 2, 2],
            [2, 3, 8, 9, 11, 2],
            [2, 9, 1, 1, 10, 2],
            [2, 2, 2, 2, 2, 2],
        ])
        .unwrap();

        resolve(&mut grid, Command::MoveRight);

        // Both lock1 cells cleared, the player took the key cell.
        assert_eq!(grid.player(), (2, 1));
        assert_eq!(grid.get(3, 1), Tile::Air);
        assert_eq!(grid.get(1, 2), Tile::Air);
        // Lock2 and key2 untouched.
        assert_eq!(grid.get(4, 1), Tile::Lock2);
        assert_eq!(grid.get(4, 2), Tile::Key2);
    }

    #[test]
    fn key2_pickup_is_symmetric() {
        let mut grid = level::load(&[
            [2, 2, 2, 2, 2],
            [2, 3, 10, 11, 2],
            [2, 9, 11, 1, 2],
            [2, 2, 2, 2, 2],
        ])
        .unwrap();

        resolve(&mut grid, Command::MoveRight);

        assert_eq!(grid.player(), (2, 1));
        assert_eq!(grid.get(3, 1), Tile::Air);
        assert_eq!(grid.get(2, 2), Tile::Air);
        assert_eq!(grid.get(1, 2), Tile::Lock1);
    }
}
