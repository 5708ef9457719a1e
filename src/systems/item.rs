use bevy_ecs::event::{EventReader, EventWriter};
use bevy_ecs::query::With;
use bevy_ecs::system::{Commands, Query};
use tracing::debug;

use crate::constants::ITEM_SLOT_ROW;
use crate::events::{CollisionEvent, GameEvent};
use crate::map::grid::GridPosition;
use crate::systems::components::{FloorItem, Inventory, ItemKind, PlayerControlled};
use crate::systems::movement::Position;

/// Handles player × item contacts.
///
/// A collected item keeps its entity: the floor marker comes off, its position
/// moves to the next inventory slot on the display row under the maze, and the
/// player's inventory records it in pickup order. The marker removal goes
/// through `Commands`, deferred until after the collision pass has finished
/// iterating the floor set.
pub fn item_system(
    mut commands: Commands,
    mut collisions: EventReader<CollisionEvent>,
    mut players: Query<&mut Inventory, With<PlayerControlled>>,
    mut items: Query<(&ItemKind, &mut Position), With<FloorItem>>,
    mut events: EventWriter<GameEvent>,
) {
    for collision in collisions.read() {
        let Ok((kind, mut position)) = items.get_mut(collision.other) else {
            continue;
        };
        let Ok(mut inventory) = players.single_mut() else {
            continue;
        };

        if inventory.contains(collision.other) {
            continue;
        }

        let slot = inventory.push(collision.other);
        *position = Position::settled(GridPosition::new(slot as i32, ITEM_SLOT_ROW));
        commands.entity(collision.other).remove::<FloorItem>();

        debug!(
            item = kind.sprite_name(),
            slot,
            carried = inventory.len(),
            ready = inventory.ready(),
            "Item collected"
        );
        events.write(GameEvent::ItemCollected {
            item: collision.other,
            slot,
        });
    }
}
