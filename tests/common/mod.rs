#![allow(dead_code)]

use bevy_ecs::entity::Entity;
use bevy_ecs::query::With;
use macgyver_escape::{
    constants::{CELL_SIZE, MAZE_SIZE},
    game::{Game, GameConfig},
    map::{
        parser::{LevelCell, LevelData},
        GridPosition,
    },
    systems::{FloorItem, ItemKind, LifeStatus, PlayerControlled, Position},
};

pub const SEED: u64 = 0x4D61_6347;

pub fn sprite_names() -> Vec<String> {
    [
        "wall",
        "floor",
        "player",
        "guardian",
        "plastic_tube",
        "ether",
        "needle",
    ]
    .iter()
    .map(|name| name.to_string())
    .collect()
}

pub fn flat_index(col: i32, row: i32) -> usize {
    (row * MAZE_SIZE + col) as usize
}

/// An all-floor maze with the player and guardian markers at the given
/// flattened indices.
pub fn open_level(player_index: usize, guardian_index: usize) -> LevelData {
    let size = (MAZE_SIZE * MAZE_SIZE) as usize;
    let mut maze = vec![LevelCell::Terrain(1); size];
    maze[player_index] = LevelCell::Marker("P".to_string());
    maze[guardian_index] = LevelCell::Marker("G".to_string());
    LevelData {
        sprite_names: sprite_names(),
        maze,
    }
}

/// Player in the top-left corner, guardian in the bottom-right corner.
pub fn corner_level() -> LevelData {
    let size = (MAZE_SIZE * MAZE_SIZE) as usize;
    open_level(0, size - 1)
}

/// Turns the given cells of a level into walls.
pub fn with_walls(mut level: LevelData, walls: &[(i32, i32)]) -> LevelData {
    for &(col, row) in walls {
        level.maze[flat_index(col, row)] = LevelCell::Terrain(0);
    }
    level
}

/// A game with deterministic item placement and the default animated movement.
pub fn seeded_game(level: &LevelData) -> Game {
    Game::with_config(
        level,
        GameConfig {
            rng_seed: Some(SEED),
            ..GameConfig::default()
        },
    )
    .expect("game should build")
}

/// A game with deterministic item placement and instant grid-snap movement,
/// so every accepted move lands within a single tick.
pub fn instant_game(level: &LevelData) -> Game {
    Game::with_config(
        level,
        GameConfig {
            step_pixels: CELL_SIZE,
            rng_seed: Some(SEED),
        },
    )
    .expect("game should build")
}

pub fn player_entity(game: &mut Game) -> Entity {
    let mut players = game.world.query_filtered::<Entity, With<PlayerControlled>>();
    players.single(&game.world).expect("exactly one player")
}

pub fn player_position(game: &mut Game) -> Position {
    let mut players = game.world.query_filtered::<&Position, With<PlayerControlled>>();
    *players.single(&game.world).expect("exactly one player")
}

pub fn player_status(game: &mut Game) -> LifeStatus {
    let mut players = game.world.query_filtered::<&LifeStatus, With<PlayerControlled>>();
    *players.single(&game.world).expect("exactly one player")
}

pub fn guardian_status(game: &mut Game) -> LifeStatus {
    let mut guardians = game
        .world
        .query_filtered::<&LifeStatus, With<macgyver_escape::systems::Guardian>>();
    *guardians.single(&game.world).expect("exactly one guardian")
}

pub fn guardian_position(game: &mut Game) -> Position {
    let mut guardians = game
        .world
        .query_filtered::<&Position, With<macgyver_escape::systems::Guardian>>();
    *guardians.single(&game.world).expect("exactly one guardian")
}

/// Every item entity with its kind, position, and whether it still lies on
/// the floor.
pub fn items(game: &mut Game) -> Vec<(Entity, ItemKind, Position, bool)> {
    let mut query = game
        .world
        .query::<(Entity, &ItemKind, &Position, Option<&FloorItem>)>();
    query
        .iter(&game.world)
        .map(|(entity, kind, position, floor)| (entity, *kind, *position, floor.is_some()))
        .collect()
}

/// Parks every item at the given cells, in entity order, so scripted
/// scenarios do not depend on where random placement put them.
pub fn park_items(game: &mut Game, cells: &[GridPosition]) {
    let entities: Vec<Entity> = items(game).iter().map(|(entity, ..)| *entity).collect();
    assert_eq!(entities.len(), cells.len());
    for (entity, &cell) in entities.into_iter().zip(cells) {
        place_item(game, entity, cell);
    }
}

/// Parks an item at a specific cell for scripted scenarios.
pub fn place_item(game: &mut Game, item: Entity, cell: GridPosition) {
    let mut entity = game.world.entity_mut(item);
    let mut position = entity
        .get_mut::<Position>()
        .expect("item has a position");
    *position = Position::settled(cell);
}
