//! Centralized error types for the game.
//!
//! This module defines all error types used throughout the application,
//! providing a consistent error handling approach.

use bevy_ecs::event::Event;

/// Main error type for the game.
///
/// This is the primary error type that should be used in public APIs. Level
/// and placement errors are fatal at construction time; the remaining variants
/// are reported by systems through the error event channel.
#[derive(thiserror::Error, Debug, Event)]
pub enum GameError {
    #[error("Level data error: {0}")]
    Level(#[from] LevelError),

    #[error("Item placement error: {0}")]
    Placement(#[from] PlacementError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Errors raised while reading the level document.
#[derive(thiserror::Error, Debug)]
pub enum LevelError {
    #[error("Malformed level document: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Maze must contain exactly {expected} cells, found {found}")]
    WrongCellCount { expected: usize, found: usize },

    #[error("Unknown marker in maze data: {0:?}")]
    UnknownMarker(String),

    #[error("Player start marker \"P\" not found in maze data")]
    PlayerStartMissing,

    #[error("Guardian start marker \"G\" not found in maze data")]
    GuardianStartMissing,

    #[error("Duplicate {0:?} marker in maze data")]
    DuplicateMarker(char),

    #[error("Required sprite {0:?} missing from sprite list")]
    MissingSprite(String),
}

/// Errors raised while placing items on the maze floor.
#[derive(thiserror::Error, Debug)]
pub enum PlacementError {
    #[error("No free floor cell found after {attempts} attempts")]
    Exhausted { attempts: u32 },
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
