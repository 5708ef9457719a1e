//! Player movement: admission control and sub-cell animation.

use bevy_ecs::component::Component;
use bevy_ecs::event::EventWriter;
use bevy_ecs::query::With;
use bevy_ecs::system::{Query, Res};
use glam::IVec2;
use tracing::trace;

use crate::error::GameError;
use crate::map::builder::Maze;
use crate::map::grid::GridPosition;
use crate::systems::components::{HeldDirection, MovementConfig, PlayerControlled};

/// Where an entity is, in the maze referential.
///
/// Settled entities sit exactly on a cell. A moving entity tracks its live
/// pixel position and slides toward `target` a fixed step per tick.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Settled {
        cell: GridPosition,
    },
    Moving {
        target: GridPosition,
        pixel: IVec2,
        velocity: IVec2,
    },
}

impl Position {
    pub fn settled(cell: GridPosition) -> Self {
        Position::Settled { cell }
    }

    pub fn is_moving(&self) -> bool {
        matches!(self, Position::Moving { .. })
    }

    /// The cell currently occupied: the exact cell when settled, the cell
    /// containing the sprite's top-left pixel while animating.
    pub fn grid(&self) -> GridPosition {
        match *self {
            Position::Settled { cell } => cell,
            Position::Moving { pixel, .. } => GridPosition::from_pixel(pixel),
        }
    }

    /// The top-left pixel handed to the renderer.
    pub fn pixel(&self) -> IVec2 {
        match *self {
            Position::Settled { cell } => cell.to_pixel(),
            Position::Moving { pixel, .. } => pixel,
        }
    }

    /// Commits to an adjacent target cell. Ignored while an animation is in
    /// flight; callers must have validated the target against the maze.
    pub fn begin_move(&mut self, target: GridPosition, step: i32) {
        if let Position::Settled { cell } = *self {
            let pixel = cell.to_pixel();
            let velocity = (target.to_pixel() - pixel).signum() * step;
            *self = Position::Moving {
                target,
                pixel,
                velocity,
            };
        }
    }

    /// Advances the animation one tick.
    ///
    /// Snaps exactly onto the target once the remaining distance on both axes
    /// is within one step, so a step that does not divide the cell size still
    /// lands pixel-aligned. Returns true when the move completed this tick.
    pub fn tick(&mut self, step: i32) -> bool {
        if let Position::Moving {
            target,
            pixel,
            velocity,
        } = *self
        {
            let remaining = (target.to_pixel() - pixel).abs();
            if remaining.x <= step && remaining.y <= step {
                *self = Position::Settled { cell: target };
                return true;
            }
            *self = Position::Moving {
                target,
                pixel: pixel + velocity,
                velocity,
            };
        }
        false
    }
}

/// Executes frame-by-frame movement for the player.
///
/// While settled, a held direction starts a move onto the adjacent cell if the
/// maze allows it; a direction held mid-animation is ignored (no queueing).
/// The in-flight animation then advances one step either way.
pub fn player_movement_system(
    maze: Res<Maze>,
    input: Res<HeldDirection>,
    config: Res<MovementConfig>,
    mut players: Query<&mut Position, With<PlayerControlled>>,
    mut errors: EventWriter<GameError>,
) {
    let mut position = match players.single_mut() {
        Ok(position) => position,
        Err(e) => {
            errors.write(GameError::InvalidState(format!(
                "No/multiple entities queried for player movement: {e}"
            )));
            return;
        }
    };

    if !position.is_moving() {
        if let Some(direction) = input.0 {
            let candidate = position.grid().adjacent(direction);
            if maze.is_floor(candidate) {
                trace!(direction = direction.as_ref(), target = ?candidate, "Player move accepted");
                position.begin_move(candidate, config.step);
            }
        }
    }

    position.tick(config.step);
}
