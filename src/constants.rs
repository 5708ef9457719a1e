//! This module contains all the constants used in the game.

use std::time::Duration;

use glam::IVec2;

/// Target tick rate of the host loop, in ticks per second.
pub const TICK_RATE: u32 = 10;
/// Duration of one frame at [`TICK_RATE`].
pub const LOOP_TIME: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);
/// How long the host should keep the result screen up after a finished game.
pub const FINISH_DISPLAY_TIME: Duration = Duration::from_secs(1);

/// The size of the maze, in cells. The maze is square.
pub const MAZE_SIZE: i32 = 15;
/// The size of each cell, in pixels.
pub const CELL_SIZE: i32 = 40;
/// The size of the maze, in pixels.
pub const MAZE_PIXEL_SIZE: IVec2 = IVec2::new(MAZE_SIZE * CELL_SIZE, MAZE_SIZE * CELL_SIZE);

/// Default distance the player travels per tick while animating between cells,
/// in pixels. Need not divide [`CELL_SIZE`] evenly; arrival snaps to the cell.
pub const MOVE_SPEED: i32 = 10;

/// The grid row just below the maze where carried items are displayed.
pub const ITEM_SLOT_ROW: i32 = MAZE_SIZE;

/// Upper bound on rejection-sampling draws when placing a single item.
pub const PLACEMENT_ATTEMPTS: u32 = 10_000;

/// Terrain classification of one maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    /// A walkable tile.
    Floor,
    /// A blocked tile.
    Wall,
}

impl Tile {
    pub fn is_floor(self) -> bool {
        matches!(self, Tile::Floor)
    }
}
