use bevy_ecs::prelude::*;

/// Grid overlap between the player and another entity, detected this tick.
///
/// Emitted by the collision pass; the item and encounter systems decide what
/// the contact means.
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollisionEvent {
    pub player: Entity,
    pub other: Entity,
}

/// Gameplay outcomes emitted for the host (sound cues, HUD updates).
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// An item moved from the floor into the player's inventory.
    ItemCollected { item: Entity, slot: usize },
    /// The guardian encounter resolved; `victory` is true when the player
    /// carried every item kind.
    Finished { victory: bool },
}
