//! Level module - decodes raw integer tables into a validated [`Grid`]
//!
//! A level is a rectangular table of small integer codes, row-major, top row
//! first (see the code table in `tui_boulders_types`). Loading is the only
//! place errors can surface before the simulation starts: a malformed table
//! produces a [`LevelError`] and no grid at all.

use thiserror::Error;

use tui_boulders_types::Tile;

use crate::grid::Grid;

/// Load-time failures. All of them are fatal; a partially-built grid is
/// never returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LevelError {
    #[error("level has no rows or no columns")]
    Empty,
    #[error("row {row} has {len} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("unrecognized tile code {code} at ({x}, {y})")]
    UnknownCode { code: u8, x: usize, y: usize },
    #[error("level has no player marker")]
    MissingPlayer,
    #[error("duplicate player marker at ({x}, {y})")]
    DuplicatePlayer { x: usize, y: usize },
}

/// The built-in level the binary boots into: an 8x6 walled room with a
/// stone to drop, a box to push, and both key/lock pairs in play.
pub const DEFAULT_LEVEL: &[[u8; 8]] = &[
    [2, 2, 2, 2, 2, 2, 2, 2],
    [2, 3, 0, 1, 1, 2, 0, 2],
    [2, 4, 2, 6, 1, 2, 0, 2],
    [2, 8, 4, 1, 1, 2, 0, 2],
    [2, 4, 1, 1, 1, 9, 0, 2],
    [2, 2, 2, 2, 2, 2, 2, 2],
];

/// Decode and validate a raw code table into a grid.
///
/// Checks, in order: the table is non-empty, every row has the same width,
/// every code is recognized, and exactly one cell is the player marker. The
/// player's coordinates seed the grid's cached position.
pub fn load<R: AsRef<[u8]>>(rows: &[R]) -> Result<Grid, LevelError> {
    let height = rows.len();
    let width = rows.first().map_or(0, |row| row.as_ref().len());
    if height == 0 || width == 0 {
        return Err(LevelError::Empty);
    }

    let mut tiles = Vec::with_capacity(width * height);
    let mut player = None;

    for (y, row) in rows.iter().enumerate() {
        let row = row.as_ref();
        if row.len() != width {
            return Err(LevelError::RaggedRow {
                row: y,
                len: row.len(),
                expected: width,
            });
        }
        for (x, &code) in row.iter().enumerate() {
            let tile = Tile::from_code(code).ok_or(LevelError::UnknownCode { code, x, y })?;
            if tile == Tile::Player {
                if player.is_some() {
                    return Err(LevelError::DuplicatePlayer { x, y });
                }
                player = Some((x, y));
            }
            tiles.push(tile);
        }
    }

    let player = player.ok_or(LevelError::MissingPlayer)?;
    Ok(Grid::from_parts(width, height, tiles, player))
}
