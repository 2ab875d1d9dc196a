use serde::{Deserialize, Serialize};

use crate::block::error::TileRangeError;

/// Side length of the texture atlas grid, in tiles. The atlas is the only
/// place this geometry is encoded; everything else works with [`TileIndex`].
pub const ATLAS_GRID: u8 = 16;

/// Linear index of one cell in the texture atlas. Always decomposable into
/// a (column, row) pair inside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileIndex(u8);

impl TileIndex {
    /// Build an index from grid coordinates. Fails outside the grid.
    pub fn from_col_row(col: u8, row: u8) -> Result<Self, TileRangeError> {
        if col >= ATLAS_GRID || row >= ATLAS_GRID {
            return Err(TileRangeError {
                col: col as i64,
                row: row as i64,
            });
        }
        Ok(Self(col + ATLAS_GRID * row))
    }

    /// Reinterpret a linear index. Total: every byte names a valid cell.
    pub fn from_index(index: u8) -> Self {
        Self(index)
    }

    /// Decompose into (column, row) grid coordinates.
    pub fn col_row(self) -> (u8, u8) {
        (self.0 % ATLAS_GRID, self.0 / ATLAS_GRID)
    }

    pub fn index(self) -> u8 {
        self.0
    }
}

impl From<TileIndex> for u8 {
    fn from(tile: TileIndex) -> u8 {
        tile.0
    }
}
