//! Maze construction and terrain lookup.

use bevy_ecs::resource::Resource;
use rand::rngs::SmallRng;
use rand::Rng;
use tracing::debug;

use crate::constants::{Tile, MAZE_SIZE, PLACEMENT_ATTEMPTS};
use crate::error::{GameResult, PlacementError};
use crate::map::grid::GridPosition;
use crate::map::parser::{LevelData, LevelParser};

/// The starting positions of the level's fixed entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartPositions {
    pub player: GridPosition,
    pub guardian: GridPosition,
}

/// The maze terrain and entity start markers, loaded once per level.
#[derive(Resource)]
pub struct Maze {
    /// Terrain indexed as `tiles[col][row]`.
    tiles: [[Tile; MAZE_SIZE as usize]; MAZE_SIZE as usize],
    /// The starting positions recorded from the level's `"P"`/`"G"` markers.
    pub start_positions: StartPositions,
}

impl Maze {
    /// Builds a maze from a level document.
    ///
    /// Fails when the document is structurally invalid; the host must abort
    /// startup rather than continue with partial state.
    pub fn new(level: &LevelData) -> GameResult<Maze> {
        let parsed = LevelParser::parse(level)?;
        debug!(player = ?parsed.player_start, guardian = ?parsed.guardian_start, "Level parsed");

        Ok(Maze {
            tiles: parsed.tiles,
            start_positions: StartPositions {
                player: parsed.player_start,
                guardian: parsed.guardian_start,
            },
        })
    }

    /// Whether `pos` is a walkable cell. Out-of-bounds positions are never
    /// walkable. Sole collision authority for movement validation and item
    /// placement.
    pub fn is_floor(&self, pos: GridPosition) -> bool {
        pos.in_bounds() && self.tiles[pos.col() as usize][pos.row() as usize].is_floor()
    }

    /// The terrain at `pos`, or `None` when out of bounds.
    pub fn tile(&self, pos: GridPosition) -> Option<Tile> {
        pos.in_bounds()
            .then(|| self.tiles[pos.col() as usize][pos.row() as usize])
    }

    /// Iterates every cell with its terrain, row-major, for the rendering
    /// collaborator.
    pub fn tiles(&self) -> impl Iterator<Item = (GridPosition, Tile)> + '_ {
        (0..MAZE_SIZE).flat_map(move |row| {
            (0..MAZE_SIZE).map(move |col| {
                let pos = GridPosition::new(col, row);
                (pos, self.tiles[col as usize][row as usize])
            })
        })
    }

    /// Draws a uniform random floor cell not present in `excluded`.
    ///
    /// Rejection sampling, bounded at [`PLACEMENT_ATTEMPTS`] so a maze too
    /// dense to admit another item fails loudly instead of spinning.
    pub fn random_floor_position(
        &self,
        rng: &mut SmallRng,
        excluded: &[GridPosition],
    ) -> GameResult<GridPosition> {
        for _ in 0..PLACEMENT_ATTEMPTS {
            let pos = GridPosition::new(rng.random_range(0..MAZE_SIZE), rng.random_range(0..MAZE_SIZE));
            if self.is_floor(pos) && !excluded.contains(&pos) {
                return Ok(pos);
            }
        }

        Err(PlacementError::Exhausted {
            attempts: PLACEMENT_ATTEMPTS,
        }
        .into())
    }
}
