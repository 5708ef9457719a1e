//! Game-phase tracking and guardian-encounter resolution.

use bevy_ecs::event::{EventReader, EventWriter};
use bevy_ecs::query::{With, Without};
use bevy_ecs::resource::Resource;
use bevy_ecs::system::{Query, ResMut};
use tracing::info;

use crate::events::{CollisionEvent, GameEvent};
use crate::systems::components::{Guardian, Inventory, LifeStatus, PlayerControlled};

/// Game-phase signal the controller returns to the host every tick.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// The game continues; keep ticking.
    #[default]
    Playing,
    /// The guardian encounter resolved; terminal until restart.
    Finished,
}

impl GamePhase {
    pub fn is_finished(self) -> bool {
        matches!(self, GamePhase::Finished)
    }
}

/// Resolves the guardian encounter.
///
/// Reaching the guardian with every item kind carried kills the guardian;
/// reaching it unprepared kills the player. Either way the phase becomes
/// [`GamePhase::Finished`] and stays there until restart.
pub fn encounter_system(
    mut collisions: EventReader<CollisionEvent>,
    mut phase: ResMut<GamePhase>,
    mut players: Query<(&Inventory, &mut LifeStatus), With<PlayerControlled>>,
    mut guardians: Query<&mut LifeStatus, (With<Guardian>, Without<PlayerControlled>)>,
    mut events: EventWriter<GameEvent>,
) {
    for collision in collisions.read() {
        if phase.is_finished() {
            return;
        }
        let Ok(mut guardian_life) = guardians.get_mut(collision.other) else {
            continue;
        };
        let Ok((inventory, mut player_life)) = players.get_mut(collision.player) else {
            continue;
        };

        let victory = inventory.ready();
        if victory {
            guardian_life.kill();
            info!("Guardian defeated");
        } else {
            player_life.kill();
            info!(carried = inventory.len(), "Player captured by the guardian");
        }
        *phase = GamePhase::Finished;
        events.write(GameEvent::Finished { victory });
    }
}
