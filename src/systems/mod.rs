//! ECS systems and components driving the per-tick update.

pub mod collision;
pub mod components;
pub mod item;
pub mod movement;
pub mod state;

pub use collision::collision_system;
pub use components::{
    FloorItem, Guardian, GuardianBundle, HeldDirection, Inventory, ItemBundle, ItemKind, LifeStatus,
    MovementConfig, PlacementRng, PlayerBundle, PlayerControlled, Renderable, SpawnPosition,
};
pub use item::item_system;
pub use movement::{player_movement_system, Position};
pub use state::{encounter_system, GamePhase};
