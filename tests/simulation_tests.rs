//! End-to-end simulation tests driven through the facade crate: the
//! command-then-gravity step, pushes, key pickups, and the player-cache
//! invariant.

use tui_boulders::core::GameState;
use tui_boulders::types::{Command, FallingState, Tile};

/// The cached player position must always equal the unique player cell.
fn assert_player_cache_consistent(game: &GameState) {
    let markers: Vec<_> = game
        .grid()
        .cells()
        .filter(|&(_, _, tile)| tile == Tile::Player)
        .collect();
    assert_eq!(markers.len(), 1, "exactly one player marker expected");
    let (x, y, _) = markers[0];
    assert_eq!(game.player(), (x, y));
}

#[test]
fn stone_above_air_falls_one_row_in_one_tick() {
    // 6x8 room, player at (1, 1), resting stone at (1, 2) over air at (1, 3).
    let mut game = GameState::load(&[
        [2, 2, 2, 2, 2, 2],
        [2, 3, 0, 0, 0, 2],
        [2, 4, 0, 0, 0, 2],
        [2, 0, 0, 0, 0, 2],
        [2, 1, 1, 1, 1, 2],
        [2, 0, 0, 0, 0, 2],
        [2, 0, 0, 0, 0, 2],
        [2, 2, 2, 2, 2, 2],
    ])
    .unwrap();

    game.step();

    assert_eq!(game.grid().get(1, 2), Tile::Air);
    assert_eq!(game.grid().get(1, 3), Tile::Stone(FallingState::Falling));
    assert_player_cache_consistent(&game);

    // Next tick: it lands on flux and rests without moving further.
    game.step();
    assert_eq!(game.grid().get(1, 3), Tile::Stone(FallingState::Resting));
    assert_eq!(game.grid().get(1, 4), Tile::Flux);
}

#[test]
fn push_relocates_box_and_player_in_one_resolution() {
    // Player (1, 1), box (2, 1), air (3, 1), support under (2, 2).
    let mut game = GameState::load(&[
        [2, 2, 2, 2, 2],
        [2, 3, 6, 0, 2],
        [2, 1, 1, 1, 2],
        [2, 2, 2, 2, 2],
    ])
    .unwrap();

    game.enqueue(Command::MoveRight);
    game.step();

    assert_eq!(game.player(), (2, 1));
    assert_eq!(game.grid().get(3, 1), Tile::Box(FallingState::Resting));
    assert_eq!(game.grid().get(1, 1), Tile::Air);
    assert_player_cache_consistent(&game);
}

#[test]
fn pushed_stone_over_a_hole_starts_falling_on_the_same_step() {
    // The push succeeds (destination supported), but the support is flux at
    // the column beyond; pushing onto air-below happens when the stone's new
    // cell has air underneath after command resolution.
    let mut game = GameState::load(&[
        [2, 2, 2, 2, 2, 2],
        [2, 3, 4, 0, 0, 2],
        [2, 1, 1, 1, 0, 2],
        [2, 2, 2, 2, 2, 2],
    ])
    .unwrap();

    // First push: stone to (3, 1), supported by flux at (3, 2)... then the
    // gravity pass sees support and leaves it resting.
    game.enqueue(Command::MoveRight);
    game.step();
    assert_eq!(game.grid().get(3, 1), Tile::Stone(FallingState::Resting));

    // Second push: stone to (4, 1); (4, 2) is air, so the same step's
    // gravity pass drops it.
    game.enqueue(Command::MoveRight);
    game.step();
    assert_eq!(game.grid().get(4, 1), Tile::Air);
    assert_eq!(game.grid().get(4, 2), Tile::Stone(FallingState::Falling));
    assert_player_cache_consistent(&game);
}

#[test]
fn key1_pickup_clears_both_lock1_tiles_and_spares_lock2() {
    let mut game = GameState::load(&[
        [2, 2, 2, 2, 2, 2],
        [2, 3, 8, 9, 0, 2],
        [2, 9, 1, 11, 0, 2],
        [2, 2, 2, 2, 2, 2],
    ])
    .unwrap();

    game.enqueue(Command::MoveRight);
    game.step();

    assert_eq!(game.player(), (2, 1));
    assert_eq!(game.grid().get(3, 1), Tile::Air);
    assert_eq!(game.grid().get(1, 2), Tile::Air);
    assert_eq!(game.grid().get(3, 2), Tile::Lock2);
    assert_player_cache_consistent(&game);
}

#[test]
fn unlocked_passage_is_walkable_in_a_later_step() {
    // Pick up key1, then walk through where the lock used to be.
    let mut game = GameState::load(&[
        [2, 2, 2, 2, 2],
        [2, 3, 8, 9, 2],
        [2, 1, 1, 1, 2],
        [2, 2, 2, 2, 2],
    ])
    .unwrap();

    game.enqueue(Command::MoveRight);
    game.step();
    game.enqueue(Command::MoveRight);
    game.step();

    assert_eq!(game.player(), (3, 1));
    assert_player_cache_consistent(&game);
}

#[test]
fn falling_stone_blocks_pushes_until_it_lands() {
    let mut game = GameState::load(&[
        [2, 2, 2, 2, 2],
        [2, 3, 5, 0, 2],
        [2, 1, 0, 1, 2],
        [2, 2, 2, 2, 2],
    ])
    .unwrap();

    // The stone is airborne: the push is a no-op, and gravity then drops the
    // stone out of the player's row entirely.
    game.enqueue(Command::MoveRight);
    game.step();
    assert_eq!(game.player(), (1, 1));
    assert_eq!(game.grid().get(2, 2), Tile::Stone(FallingState::Falling));

    // After landing it rests and can be pushed again... but it is no longer
    // adjacent, so the player just walks into the vacated cell.
    game.step();
    game.enqueue(Command::MoveRight);
    game.step();
    assert_eq!(game.player(), (2, 1));
    assert_player_cache_consistent(&game);
}

#[test]
fn commands_queued_in_one_step_apply_in_reverse_arrival_order() {
    let mut game = GameState::load(&[
        [2, 2, 2, 2],
        [2, 3, 0, 2],
        [2, 0, 2, 2],
        [2, 2, 2, 2],
    ])
    .unwrap();

    // FIFO would end at (2, 1); the stack drain ends at (1, 2).
    game.enqueue(Command::MoveRight);
    game.enqueue(Command::MoveDown);
    game.step();

    assert_eq!(game.player(), (1, 2));
    assert_player_cache_consistent(&game);
}

#[test]
fn blocked_moves_leave_the_grid_untouched() {
    let mut game = GameState::load(&[[2, 2, 2], [2, 3, 2], [2, 2, 2]]).unwrap();
    let before = game.grid().clone();

    for command in [
        Command::MoveLeft,
        Command::MoveRight,
        Command::MoveUp,
        Command::MoveDown,
    ] {
        game.enqueue(command);
        game.step();
    }

    assert_eq!(game.grid(), &before);
}
