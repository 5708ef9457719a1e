//! Level-document parsing: converts the raw level data into structured maze data.

use serde::Deserialize;

use crate::constants::{Tile, MAZE_SIZE};
use crate::error::{GameResult, LevelError};
use crate::map::grid::GridPosition;

/// Sprite identifiers every level document must declare so the host can
/// preload them before the game starts.
pub const REQUIRED_SPRITES: [&str; 7] = [
    "wall",
    "floor",
    "player",
    "guardian",
    "plastic_tube",
    "ether",
    "needle",
];

/// The level document, as supplied by the host's file loader.
#[derive(Debug, Clone, Deserialize)]
pub struct LevelData {
    /// Asset identifiers the host must preload.
    pub sprite_names: Vec<String>,
    /// Flattened row-major maze cells, `MAZE_SIZE`² entries.
    pub maze: Vec<LevelCell>,
}

impl LevelData {
    /// Deserializes a level document from JSON text.
    pub fn from_json(text: &str) -> GameResult<Self> {
        let data: LevelData = serde_json::from_str(text).map_err(LevelError::Malformed)?;
        Ok(data)
    }
}

/// One entry of the flattened maze sequence: a terrain flag (falsy = wall,
/// truthy = floor) or an entity start marker (`"P"` / `"G"`, on floor terrain).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LevelCell {
    Terrain(i64),
    Truthy(bool),
    Marker(String),
}

/// The level document after structural validation.
#[derive(Debug)]
pub struct ParsedLevel {
    /// Terrain indexed as `tiles[col][row]`.
    pub tiles: [[Tile; MAZE_SIZE as usize]; MAZE_SIZE as usize],
    pub player_start: GridPosition,
    pub guardian_start: GridPosition,
}

/// Parser for converting level documents into structured map data.
pub struct LevelParser;

impl LevelParser {
    /// Parses a level document into structured map data.
    ///
    /// # Errors
    ///
    /// Returns an error if the maze sequence has the wrong length, carries an
    /// unknown marker, is missing (or duplicates) the `"P"`/`"G"` start
    /// markers, or if a required sprite is absent from the sprite list.
    pub fn parse(data: &LevelData) -> Result<ParsedLevel, LevelError> {
        let expected = (MAZE_SIZE * MAZE_SIZE) as usize;
        if data.maze.len() != expected {
            return Err(LevelError::WrongCellCount {
                expected,
                found: data.maze.len(),
            });
        }

        for required in REQUIRED_SPRITES {
            if !data.sprite_names.iter().any(|name| name == required) {
                return Err(LevelError::MissingSprite(required.to_string()));
            }
        }

        let mut tiles = [[Tile::Wall; MAZE_SIZE as usize]; MAZE_SIZE as usize];
        let mut player_start: Option<GridPosition> = None;
        let mut guardian_start: Option<GridPosition> = None;

        for (index, cell) in data.maze.iter().enumerate() {
            let index = index as i32;
            let pos = GridPosition::new(index % MAZE_SIZE, index / MAZE_SIZE);
            let tile = match cell {
                LevelCell::Terrain(value) => {
                    if *value == 0 {
                        Tile::Wall
                    } else {
                        Tile::Floor
                    }
                }
                LevelCell::Truthy(value) => {
                    if *value {
                        Tile::Floor
                    } else {
                        Tile::Wall
                    }
                }
                LevelCell::Marker(marker) => match marker.as_str() {
                    "P" => {
                        if player_start.replace(pos).is_some() {
                            return Err(LevelError::DuplicateMarker('P'));
                        }
                        Tile::Floor
                    }
                    "G" => {
                        if guardian_start.replace(pos).is_some() {
                            return Err(LevelError::DuplicateMarker('G'));
                        }
                        Tile::Floor
                    }
                    other => return Err(LevelError::UnknownMarker(other.to_string())),
                },
            };
            tiles[pos.col() as usize][pos.row() as usize] = tile;
        }

        let player_start = player_start.ok_or(LevelError::PlayerStartMissing)?;
        let guardian_start = guardian_start.ok_or(LevelError::GuardianStartMissing)?;

        Ok(ParsedLevel {
            tiles,
            player_start,
            guardian_start,
        })
    }
}
