use bevy_ecs::entity::Entity;
use bevy_ecs::event::EventWriter;
use bevy_ecs::query::With;
use bevy_ecs::system::Query;

use crate::error::GameError;
use crate::events::CollisionEvent;
use crate::systems::components::{FloorItem, Guardian, PlayerControlled};
use crate::systems::movement::Position;

/// Detects the player overlapping floor items or the guardian.
///
/// Overlap is grid-cell equality, evaluated once per tick after movement has
/// advanced. Emits a [`CollisionEvent`] per contact; the item and encounter
/// systems decide what each contact means, so the collections being scanned
/// here are never mutated mid-iteration.
pub fn collision_system(
    players: Query<(Entity, &Position), With<PlayerControlled>>,
    items: Query<(Entity, &Position), With<FloorItem>>,
    guardians: Query<(Entity, &Position), With<Guardian>>,
    mut events: EventWriter<CollisionEvent>,
    mut errors: EventWriter<GameError>,
) {
    let (player, player_position) = match players.single() {
        Ok(found) => found,
        Err(e) => {
            errors.write(GameError::InvalidState(format!(
                "No/multiple entities queried for collision detection: {e}"
            )));
            return;
        }
    };
    let player_cell = player_position.grid();

    for (item, position) in items.iter() {
        if position.grid() == player_cell {
            events.write(CollisionEvent { player, other: item });
        }
    }

    for (guardian, position) in guardians.iter() {
        if position.grid() == player_cell {
            events.write(CollisionEvent {
                player,
                other: guardian,
            });
        }
    }
}
