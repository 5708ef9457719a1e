use bevy_ecs::{bundle::Bundle, component::Component, entity::Entity, resource::Resource};
use rand::rngs::SmallRng;
use smallvec::SmallVec;
use strum::EnumCount as _;
use strum_macros::{EnumCount, EnumIter, IntoStaticStr};

use crate::constants::MOVE_SPEED;
use crate::map::direction::Direction;
use crate::map::grid::GridPosition;
use crate::systems::movement::Position;

/// A tag component for entities that are controlled by the player.
#[derive(Default, Component)]
pub struct PlayerControlled;

/// A tag component for the stationary guardian.
#[derive(Default, Component)]
pub struct Guardian;

/// A marker for items still lying on the maze floor. Removed on pickup, so a
/// collected item can never be collected again.
#[derive(Default, Component)]
pub struct FloorItem;

/// The three collectible item kinds needed to get past the guardian.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ItemKind {
    PlasticTube,
    Ether,
    Needle,
}

impl ItemKind {
    /// Asset identifier the renderer uses for this item.
    pub fn sprite_name(self) -> &'static str {
        self.into()
    }
}

/// Alive/dead status for the player and the guardian.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifeStatus {
    #[default]
    Alive,
    Dead,
}

impl LifeStatus {
    pub fn is_alive(self) -> bool {
        matches!(self, LifeStatus::Alive)
    }

    pub fn kill(&mut self) {
        *self = LifeStatus::Dead;
    }
}

/// The cell an entity was created at, replayed by restart.
#[derive(Component, Debug, Clone, Copy)]
pub struct SpawnPosition(pub GridPosition);

/// The items the player carries, in pickup order.
#[derive(Component, Debug, Default)]
pub struct Inventory {
    items: SmallVec<[Entity; ItemKind::COUNT]>,
}

impl Inventory {
    /// Appends an item and returns the inventory slot it landed in.
    pub fn push(&mut self, item: Entity) -> usize {
        self.items.push(item);
        self.items.len() - 1
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, item: Entity) -> bool {
        self.items.contains(&item)
    }

    /// The player can defeat the guardian once every item kind is carried.
    pub fn ready(&self) -> bool {
        self.items.len() >= ItemKind::COUNT
    }

    /// Removes and returns everything carried; restart hands the items back
    /// to the floor pool.
    pub fn take_all(&mut self) -> SmallVec<[Entity; ItemKind::COUNT]> {
        std::mem::take(&mut self.items)
    }
}

/// A component for entities that have a sprite, with a layer for ordering.
#[derive(Component, Debug, Clone, Copy)]
pub struct Renderable {
    /// Asset identifier from the level's sprite vocabulary.
    pub sprite: &'static str,
    pub layer: u8,
}

#[derive(Bundle)]
pub struct PlayerBundle {
    pub player: PlayerControlled,
    pub position: Position,
    pub spawn: SpawnPosition,
    pub life: LifeStatus,
    pub inventory: Inventory,
    pub sprite: Renderable,
}

#[derive(Bundle)]
pub struct GuardianBundle {
    pub guardian: Guardian,
    pub position: Position,
    pub spawn: SpawnPosition,
    pub life: LifeStatus,
    pub sprite: Renderable,
}

#[derive(Bundle)]
pub struct ItemBundle {
    pub kind: ItemKind,
    pub position: Position,
    pub floor: FloorItem,
    pub sprite: Renderable,
}

/// The directional key the host reports as held this tick, `None` when idle.
/// Injected by the controller before each schedule run.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldDirection(pub Option<Direction>);

/// Runtime movement policy.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementConfig {
    /// Pixels traveled per tick while animating. A full cell size makes every
    /// move land in a single tick.
    pub step: i32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self { step: MOVE_SPEED }
    }
}

/// Session RNG used for item placement.
#[derive(Resource)]
pub struct PlacementRng(pub SmallRng);
