//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in one `GameState` owned by the caller.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::obstacles::ObstacleField;
use super::rect::Rect;
use crate::error::ConfigError;
use crate::settings::GameConfig;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first jump
    #[default]
    NotStarted,
    /// Active gameplay
    Running,
    /// Run ended by a collision; simulation frozen until the next jump
    GameOver,
}

/// The falling, player-controlled object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    /// Fixed horizontal center
    pub x: f32,
    /// Vertical center (y grows down)
    pub y: f32,
    /// Vertical velocity in pixels per tick (positive is down)
    pub vel: f32,
    /// Diameter
    pub size: f32,
}

impl Bird {
    /// Bird at its start position: vertically centered, at rest
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: config.bird_x,
            y: (config.screen_height / 2.0).floor(),
            vel: 0.0,
            size: config.bird_size,
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.size / 2.0
    }

    /// Collision box centered on the bird
    pub fn bounding_box(&self) -> Rect {
        Rect::centered(glam::Vec2::new(self.x, self.y), self.size)
    }
}

/// A pair of barriers with a gate between them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Stable id, increasing in spawn order
    pub id: u32,
    /// Left edge shared by both barriers
    pub x: f32,
    pub width: f32,
    /// Height of the top barrier (from y = 0)
    pub top_height: f32,
    /// Vertical size of the gate
    pub gap: f32,
    /// Bottom barrier extends down to here
    pub screen_height: f32,
    /// Already credited to the score
    pub passed: bool,
}

impl Obstacle {
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge of the bottom barrier
    #[inline]
    pub fn bottom_y(&self) -> f32 {
        self.top_height + self.gap
    }

    #[inline]
    pub fn bottom_height(&self) -> f32 {
        self.screen_height - self.bottom_y()
    }

    /// Vertical center of the gate
    pub fn gate_center(&self) -> f32 {
        self.top_height + self.gap / 2.0
    }

    pub fn top_rect(&self) -> Rect {
        Rect::new(self.x, 0.0, self.width, self.top_height)
    }

    pub fn bottom_rect(&self) -> Rect {
        Rect::new(self.x, self.bottom_y(), self.width, self.bottom_height())
    }

    pub fn is_off_screen(&self) -> bool {
        self.right() <= 0.0
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Validated configuration
    pub config: GameConfig,
    /// Run seed for reproducibility
    pub seed: u64,
    /// Obstacle placement RNG
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Player
    pub bird: Bird,
    /// Live obstacles, oldest first
    pub obstacles: ObstacleField,
    /// Obstacles passed this run
    pub score: u32,
    /// Ticks simulated this run
    pub time_ticks: u64,
    /// Runs started since creation
    pub runs: u32,
}

impl GameState {
    /// Create a new game state, rejecting unusable configuration
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_validated(config, seed))
    }

    /// Default configuration with the given seed
    pub fn with_seed(seed: u64) -> Self {
        Self::from_validated(GameConfig::default(), seed)
    }

    fn from_validated(config: GameConfig, seed: u64) -> Self {
        Self {
            bird: Bird::new(&config),
            config,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::NotStarted,
            obstacles: ObstacleField::default(),
            score: 0,
            time_ticks: 0,
            runs: 0,
        }
    }

    /// Back to a fresh, ready-to-start state. The RNG keeps running so the
    /// next run sees new gates.
    pub fn reset(&mut self) {
        self.bird = Bird::new(&self.config);
        self.obstacles.clear();
        self.score = 0;
        self.time_ticks = 0;
        self.phase = GamePhase::NotStarted;
        log::debug!("Game reset");
    }

    /// Gameplay-visible state, excluding RNG and bookkeeping
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            phase: self.phase,
            bird: self.bird.clone(),
            obstacles: self.obstacles.iter().cloned().collect(),
            score: self.score,
            time_ticks: self.time_ticks,
        }
    }
}

/// Comparable view of a game state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub phase: GamePhase,
    pub bird: Bird,
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    pub time_ticks: u64,
}
