//! Grid module - owns every tile plus the cached player position
//!
//! The grid is a fixed-size rectangle of [`Tile`] values in a flat row-major
//! vector. Alongside the tiles it caches the player's `(x, y)`; the cache is
//! redundant state and [`Grid::move_player_to`] is the only way the player
//! relocates, which keeps it equal to the unique [`Tile::Player`] cell at all
//! times.
//!
//! Shipped levels carry a solid `Unbreakable` border, so in-simulation
//! neighbor lookups never leave the grid. Accessors still assert bounds: a
//! breach means a malformed level or a logic bug and fails fast instead of
//! wrapping around.

use tui_boulders_types::Tile;

/// The tile container. Dimensions are fixed at load and never change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Flat row-major tile storage (y * width + x).
    tiles: Vec<Tile>,
    /// Cached coordinates of the unique `Tile::Player` cell.
    player: (usize, usize),
}

impl Grid {
    /// Assemble a grid from already-validated parts. The level loader is the
    /// only producer; it guarantees `tiles.len() == width * height` and that
    /// `player` addresses the single `Tile::Player` cell.
    pub(crate) fn from_parts(
        width: usize,
        height: usize,
        tiles: Vec<Tile>,
        player: (usize, usize),
    ) -> Self {
        debug_assert_eq!(tiles.len(), width * height);
        debug_assert_eq!(tiles[player.1 * width + player.0], Tile::Player);
        Self {
            width,
            height,
            tiles,
            player,
        }
    }

    /// Grid width in columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Cached player coordinates, always equal to the `Tile::Player` cell.
    pub fn player(&self) -> (usize, usize) {
        self.player
    }

    #[inline(always)]
    fn idx(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "grid access out of bounds: ({x}, {y}) on {}x{}",
            self.width,
            self.height
        );
        y * self.width + x
    }

    /// Tile at `(x, y)`. Panics on out-of-bounds access (border breach).
    pub fn get(&self, x: usize, y: usize) -> Tile {
        self.tiles[self.idx(x, y)]
    }

    /// Overwrite the tile at `(x, y)`.
    pub fn set(&mut self, x: usize, y: usize, tile: Tile) {
        let idx = self.idx(x, y);
        self.tiles[idx] = tile;
    }

    /// Raw level code of the tile at `(x, y)`, for read-back and snapshots.
    pub fn code_at(&self, x: usize, y: usize) -> u8 {
        self.get(x, y).code()
    }

    /// Relocate the player marker: the old cell becomes air, the new cell
    /// becomes the player, and the cache follows. Callers have already
    /// decided the destination is enterable.
    pub fn move_player_to(&mut self, x: usize, y: usize) {
        let (px, py) = self.player;
        self.set(px, py, Tile::Air);
        self.set(x, y, Tile::Player);
        self.player = (x, y);
    }

    /// Replace every tile matching `pred` with air. Grid-wide: one key
    /// pickup clears all same-type locks regardless of where they sit.
    pub fn remove_matching(&mut self, pred: impl Fn(Tile) -> bool) {
        for tile in &mut self.tiles {
            if pred(*tile) {
                *tile = Tile::Air;
            }
        }
    }

    /// Iterate all cells as `(x, y, tile)`, row-major from the top row.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Tile)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .map(|(i, &tile)| (i % self.width, i / self.width, tile))
    }
}
