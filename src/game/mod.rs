//! This module contains the main game logic and state.

use bevy_ecs::entity::Entity;
use bevy_ecs::event::{EventRegistry, Events};
use bevy_ecs::query::With;
use bevy_ecs::schedule::{IntoScheduleConfigs, Schedule};
use bevy_ecs::world::{Mut, World};
use glam::IVec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use strum::IntoEnumIterator;
use tracing::{debug, error};

use crate::constants::{CELL_SIZE, MOVE_SPEED};
use crate::error::{GameError, GameResult};
use crate::events::{CollisionEvent, GameEvent};
use crate::map::builder::Maze;
use crate::map::direction::Direction;
use crate::map::parser::LevelData;
use crate::systems::collision::collision_system;
use crate::systems::components::{
    FloorItem, Guardian, GuardianBundle, HeldDirection, Inventory, ItemBundle, ItemKind, LifeStatus,
    MovementConfig, PlacementRng, PlayerBundle, PlayerControlled, Renderable, SpawnPosition,
};
use crate::systems::item::item_system;
use crate::systems::movement::{player_movement_system, Position};
use crate::systems::state::{encounter_system, GamePhase};

/// Knobs the host can vary per session.
#[derive(Debug, Clone, Copy)]
pub struct GameConfig {
    /// Pixels the player travels per tick while animating between cells.
    /// [`CELL_SIZE`] degenerates to instant grid-snap movement.
    pub step_pixels: i32,
    /// Fixed seed for item placement; `None` draws entropy from the OS.
    pub rng_seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            step_pixels: MOVE_SPEED,
            rng_seed: None,
        }
    }
}

/// One entry of the per-tick draw list handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteInstance {
    /// Asset identifier from the level's sprite vocabulary.
    pub sprite: &'static str,
    /// Top-left pixel.
    pub pixel: IVec2,
    pub layer: u8,
}

/// The `Game` struct is the main entry point for the game.
///
/// It owns the world and the per-tick schedule, and is responsible for
/// validating input against the maze, advancing movement, resolving pickups
/// and the guardian encounter, and reporting the game phase to the host.
pub struct Game {
    pub world: World,
    schedule: Schedule,
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game").finish_non_exhaustive()
    }
}

impl Game {
    /// Creates a game from a level document with the default configuration.
    pub fn new(level: &LevelData) -> GameResult<Game> {
        Self::with_config(level, GameConfig::default())
    }

    /// Creates a game from a level document.
    ///
    /// Spawns the player and guardian at the level's start markers and the
    /// three items at random distinct floor cells. Any level or placement
    /// failure aborts construction.
    pub fn with_config(level: &LevelData, config: GameConfig) -> GameResult<Game> {
        if !(1..=CELL_SIZE).contains(&config.step_pixels) {
            return Err(GameError::InvalidConfig(format!(
                "step_pixels must be within 1..={CELL_SIZE}, got {}",
                config.step_pixels
            )));
        }

        let mut world = World::default();
        let mut schedule = Schedule::default();

        EventRegistry::register_event::<CollisionEvent>(&mut world);
        EventRegistry::register_event::<GameEvent>(&mut world);
        EventRegistry::register_event::<GameError>(&mut world);

        let maze = Maze::new(level)?;
        let start = maze.start_positions;

        let mut rng = match config.rng_seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };

        world.spawn(PlayerBundle {
            player: PlayerControlled,
            position: Position::settled(start.player),
            spawn: SpawnPosition(start.player),
            life: LifeStatus::Alive,
            inventory: Inventory::default(),
            sprite: Renderable {
                sprite: "player",
                layer: 2,
            },
        });

        world.spawn(GuardianBundle {
            guardian: Guardian,
            position: Position::settled(start.guardian),
            spawn: SpawnPosition(start.guardian),
            life: LifeStatus::Alive,
            sprite: Renderable {
                sprite: "guardian",
                layer: 1,
            },
        });

        let mut occupied = vec![start.player, start.guardian];
        for kind in ItemKind::iter() {
            let cell = maze.random_floor_position(&mut rng, &occupied)?;
            occupied.push(cell);
            debug!(item = kind.sprite_name(), cell = ?cell, "Item placed");

            world.spawn(ItemBundle {
                kind,
                position: Position::settled(cell),
                floor: FloorItem,
                sprite: Renderable {
                    sprite: kind.sprite_name(),
                    layer: 1,
                },
            });
        }

        world.insert_resource(maze);
        world.insert_resource(GamePhase::default());
        world.insert_resource(HeldDirection::default());
        world.insert_resource(MovementConfig {
            step: config.step_pixels,
        });
        world.insert_resource(PlacementRng(rng));

        schedule.add_systems(
            (
                player_movement_system,
                collision_system,
                item_system,
                encounter_system,
            )
                .chain(),
        );

        Ok(Game { world, schedule })
    }

    /// Runs one synchronous update of the game state.
    ///
    /// `input` is the directional key the host observes as held this tick.
    /// Once the phase is [`GamePhase::Finished`], subsequent ticks return it
    /// immediately without advancing anything, until [`Game::restart`].
    pub fn tick(&mut self, input: Option<Direction>) -> GamePhase {
        if self.phase().is_finished() {
            return GamePhase::Finished;
        }

        self.world.insert_resource(HeldDirection(input));
        self.schedule.run(&mut self.world);

        self.drain_errors();
        self.world.resource_mut::<Events<CollisionEvent>>().update();
        self.world.resource_mut::<Events<GameEvent>>().update();

        self.phase()
    }

    /// The current game-phase signal.
    pub fn phase(&self) -> GamePhase {
        *self.world.resource::<GamePhase>()
    }

    /// The maze terrain, for the rendering collaborator.
    pub fn maze(&self) -> &Maze {
        self.world.resource::<Maze>()
    }

    /// Puts the level back to a fresh run: carried items return to the floor
    /// pool, every item is re-placed at a fresh random floor cell, and the
    /// player and guardian return to their spawn cells, alive.
    pub fn restart(&mut self) -> GameResult<()> {
        let (player_spawn, returned) = {
            let mut players = self.world.query_filtered::<(
                &SpawnPosition,
                &mut Position,
                &mut LifeStatus,
                &mut Inventory,
            ), With<PlayerControlled>>();
            let (spawn, mut position, mut life, mut inventory) = players
                .single_mut(&mut self.world)
                .map_err(|e| GameError::InvalidState(format!("Player missing on restart: {e}")))?;
            *position = Position::settled(spawn.0);
            *life = LifeStatus::Alive;
            (spawn.0, inventory.take_all())
        };
        debug!(returned = returned.len(), "Carried items returned to the floor pool");

        let guardian_spawn = {
            let mut guardians = self
                .world
                .query_filtered::<(&SpawnPosition, &mut Position, &mut LifeStatus), With<Guardian>>();
            let (spawn, mut position, mut life) = guardians
                .single_mut(&mut self.world)
                .map_err(|e| GameError::InvalidState(format!("Guardian missing on restart: {e}")))?;
            *position = Position::settled(spawn.0);
            *life = LifeStatus::Alive;
            spawn.0
        };

        let item_entities: Vec<Entity> = {
            let mut items = self.world.query::<(Entity, &ItemKind)>();
            items.iter(&self.world).map(|(entity, _)| entity).collect()
        };

        let mut occupied = vec![player_spawn, guardian_spawn];
        let mut placements = Vec::with_capacity(item_entities.len());
        self.world
            .resource_scope(|world, mut rng: Mut<PlacementRng>| -> GameResult<()> {
                let maze = world.resource::<Maze>();
                for &item in &item_entities {
                    let cell = maze.random_floor_position(&mut rng.0, &occupied)?;
                    occupied.push(cell);
                    placements.push((item, cell));
                }
                Ok(())
            })?;

        for (item, cell) in placements {
            let mut entity = self.world.entity_mut(item);
            if let Some(mut position) = entity.get_mut::<Position>() {
                *position = Position::settled(cell);
            }
            entity.insert(FloorItem);
        }

        self.world.insert_resource(GamePhase::Playing);
        self.world.insert_resource(HeldDirection::default());
        self.world.resource_mut::<Events<CollisionEvent>>().clear();
        self.world.resource_mut::<Events<GameEvent>>().clear();
        self.world.resource_mut::<Events<GameError>>().clear();

        Ok(())
    }

    /// Win/lose line for the result screen; `None` while the game still runs.
    pub fn final_result(&mut self) -> Option<&'static str> {
        if !self.phase().is_finished() {
            return None;
        }

        let mut players = self.world.query_filtered::<&LifeStatus, With<PlayerControlled>>();
        let alive = players
            .single(&self.world)
            .map(|life| life.is_alive())
            .unwrap_or(false);

        Some(if alive {
            "You deliver Mac Gyver !!"
        } else {
            "You lose, try again!!"
        })
    }

    /// How many items the player carries.
    pub fn carried_count(&mut self) -> usize {
        let mut players = self.world.query_filtered::<&Inventory, With<PlayerControlled>>();
        players
            .single(&self.world)
            .map(|inventory| inventory.len())
            .unwrap_or(0)
    }

    /// Whether the player carries enough items to face the guardian.
    pub fn is_ready(&mut self) -> bool {
        let mut players = self.world.query_filtered::<&Inventory, With<PlayerControlled>>();
        players
            .single(&self.world)
            .map(|inventory| inventory.ready())
            .unwrap_or(false)
    }

    /// Drains the gameplay events accumulated since the last call, oldest
    /// first. Hosts use these for sound cues and HUD updates.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.world
            .resource_mut::<Events<GameEvent>>()
            .drain()
            .collect()
    }

    /// The per-tick draw list: every entity sprite with its current top-left
    /// pixel, back-to-front. Maze tiles render separately via [`Game::maze`].
    pub fn draw_list(&mut self) -> Vec<SpriteInstance> {
        let mut query = self.world.query::<(&Renderable, &Position)>();
        let mut sprites: Vec<SpriteInstance> = query
            .iter(&self.world)
            .map(|(renderable, position)| SpriteInstance {
                sprite: renderable.sprite,
                pixel: position.pixel(),
                layer: renderable.layer,
            })
            .collect();
        sprites.sort_by_key(|sprite| sprite.layer);
        sprites
    }

    fn drain_errors(&mut self) {
        let mut events = self.world.resource_mut::<Events<GameError>>();
        for e in events.drain() {
            error!("{e}");
        }
    }
}
