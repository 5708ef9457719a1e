//! Grid coordinates and their pixel-referential conversions.

use glam::IVec2;

use crate::constants::{CELL_SIZE, MAZE_SIZE};
use crate::map::direction::Direction;

/// A (column, row) cell coordinate on the maze grid, 0-indexed from the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPosition(IVec2);

impl GridPosition {
    pub const fn new(col: i32, row: i32) -> Self {
        Self(IVec2::new(col, row))
    }

    pub const fn col(self) -> i32 {
        self.0.x
    }

    pub const fn row(self) -> i32 {
        self.0.y
    }

    /// The top-left pixel of this cell.
    pub fn to_pixel(self) -> IVec2 {
        self.0 * CELL_SIZE
    }

    /// The cell containing the given pixel, by floor division.
    /// Exact for cell-aligned pixels.
    pub fn from_pixel(pixel: IVec2) -> Self {
        Self(pixel.div_euclid(IVec2::splat(CELL_SIZE)))
    }

    /// The neighboring cell one step in `direction`.
    /// No bounds check; callers validate the result.
    pub fn adjacent(self, direction: Direction) -> Self {
        Self(self.0 + direction.as_ivec2())
    }

    /// Whether this cell lies within the maze.
    pub fn in_bounds(self) -> bool {
        self.0.x >= 0 && self.0.y >= 0 && self.0.x < MAZE_SIZE && self.0.y < MAZE_SIZE
    }
}
