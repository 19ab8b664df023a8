//! Flappy Gates - a side-scrolling gate dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, game state)
//! - `renderer`: Canvas abstraction, scene drawing and the WebGPU pipeline
//! - `platform`: Input queue, frame clocks and the frame driver
//! - `settings`: Data-driven game configuration

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use settings::GameConfig;

/// Game configuration defaults
pub mod consts {
    /// Screen dimensions (pixels)
    pub const SCREEN_WIDTH: f32 = 400.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Target frame rate; one simulation tick per frame
    pub const TARGET_FPS: u32 = 60;
    /// Maximum ticks per animation frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Bird defaults
    pub const BIRD_SIZE: f32 = 30.0;
    pub const BIRD_X: f32 = 100.0;
    /// Added to velocity every tick (pixels/tick², positive is down)
    pub const GRAVITY: f32 = 0.5;
    /// Velocity set by a jump (pixels/tick, negative is up)
    pub const JUMP_VELOCITY: f32 = -8.0;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 70.0;
    pub const GAP_SIZE: f32 = 150.0;
    /// Horizontal scroll per tick (negative is left)
    pub const OBSTACLE_VELOCITY: f32 = -4.0;
    /// Newest obstacle must scroll this far from the right edge before the next spawns
    pub const SPAWN_DISTANCE: f32 = 200.0;
    pub const MIN_TOP_HEIGHT: f32 = 100.0;
    pub const MAX_TOP_HEIGHT: f32 = 400.0;
}
