//! The 5x5 battle field.
//!
//! Tiles are addressed by a single index `0..=24` in row-major order.
//! Distances are Manhattan, so only orthogonal neighbours are adjacent.
//! Reachability is by radius alone; the field has no terrain.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{BattleError, BattleResult};

/// Width and height of the field.
pub const GRID_SIZE: usize = 5;
/// Number of tiles on the field.
pub const TILE_COUNT: usize = GRID_SIZE * GRID_SIZE;
/// How far the hero may move in one action.
pub const MOVE_RANGE: u32 = 2;
/// Melee reach for attacks.
pub const ATTACK_RANGE: u32 = 1;

/// A tile on the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Tile(u8);

impl Tile {
    /// Create a tile from a grid index.
    pub fn new(index: usize) -> BattleResult<Self> {
        if index < TILE_COUNT {
            Ok(Self(index as u8))
        } else {
            Err(BattleError::TileOutOfRange(index))
        }
    }

    /// Create a tile from column and row. Returns `None` off the field.
    pub fn from_coords(x: usize, y: usize) -> Option<Self> {
        if x < GRID_SIZE && y < GRID_SIZE {
            Some(Self((y * GRID_SIZE + x) as u8))
        } else {
            None
        }
    }

    /// The grid index of this tile.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Column and row of this tile.
    pub fn coords(self) -> (usize, usize) {
        (self.index() % GRID_SIZE, self.index() / GRID_SIZE)
    }

    /// Every tile in scan order.
    pub fn all() -> impl Iterator<Item = Tile> {
        (0..TILE_COUNT as u8).map(Tile)
    }

    /// Step one tile towards the given column/row, if on the field.
    pub(crate) fn offset(self, dx: isize, dy: isize) -> Option<Self> {
        let (x, y) = self.coords();
        let nx = x.checked_add_signed(dx)?;
        let ny = y.checked_add_signed(dy)?;
        Self::from_coords(nx, ny)
    }
}

impl TryFrom<usize> for Tile {
    type Error = BattleError;

    fn try_from(index: usize) -> BattleResult<Self> {
        Self::new(index)
    }
}

impl From<Tile> for usize {
    fn from(tile: Tile) -> usize {
        tile.index()
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (x, y) = self.coords();
        write!(f, "#{} ({x},{y})", self.0)
    }
}

/// Manhattan distance between two tiles.
pub fn distance(a: Tile, b: Tile) -> u32 {
    let (ax, ay) = a.coords();
    let (bx, by) = b.coords();
    (ax.abs_diff(bx) + ay.abs_diff(by)) as u32
}

/// All tiles within `range` of `from`, minus `excluding`.
///
/// Iterating the result yields tiles in scan order.
pub fn reachable_tiles(from: Tile, range: u32, excluding: &[Tile]) -> BTreeSet<Tile> {
    Tile::all()
        .filter(|t| distance(from, *t) <= range && !excluding.contains(t))
        .collect()
}

/// `{target}` if it is within `range` of `from`, otherwise empty.
pub fn attackable_tiles(from: Tile, target: Tile, range: u32) -> BTreeSet<Tile> {
    let mut tiles = BTreeSet::new();
    if distance(from, target) <= range {
        tiles.insert(target);
    }
    tiles
}

/// Whether `target` is within melee reach of `from`.
pub fn in_attack_range(from: Tile, target: Tile) -> bool {
    distance(from, target) <= ATTACK_RANGE
}
