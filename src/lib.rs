//! MacGyver Escape game library crate.
//!
//! The maze/update core of a small single-player maze game: a player sprite
//! navigates a fixed 15×15 grid, collects three items, and wins or loses on
//! reaching the guardian depending on whether it carries all of them.
//!
//! The crate owns state and per-tick logic only. The host supplies the parsed
//! level document ([`map::parser::LevelData`]), reports the held directional
//! key to [`game::Game::tick`] every frame, and renders from
//! [`game::Game::draw_list`] and [`map::Maze::tiles`] using the pixel
//! coordinates the core hands out.

pub mod constants;
pub mod error;
pub mod events;
pub mod game;
pub mod map;
pub mod systems;
