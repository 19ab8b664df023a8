//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, fixed step
//! - Seeded RNG only
//! - Obstacles kept in spawn order with stable ids
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod obstacles;
pub mod physics;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{Collision, award_passes, check_collision};
pub use obstacles::{ObstacleField, generate_obstacle};
pub use physics::integrate;
pub use rect::Rect;
pub use state::{Bird, GamePhase, GameSnapshot, GameState, Obstacle};
pub use tick::{Control, InputEvent, TickReport, frame, handle_input, tick};
