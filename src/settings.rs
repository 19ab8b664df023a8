//! Game configuration
//!
//! Defaults come from [`crate::consts`]; any field can be overridden from JSON.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Environment variable naming an optional JSON config file (native only)
pub const CONFIG_ENV_VAR: &str = "FLAPPY_GATES_CONFIG";

/// Tunable game geometry and physics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,
    pub target_fps: u32,

    // === Bird ===
    pub bird_size: f32,
    pub bird_x: f32,
    pub gravity: f32,
    pub jump_velocity: f32,

    // === Obstacles ===
    pub obstacle_width: f32,
    pub gap_size: f32,
    pub obstacle_velocity: f32,
    pub spawn_distance: f32,
    /// Top barrier height range, inclusive; drawn as whole pixels
    pub min_top_height: f32,
    pub max_top_height: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            target_fps: TARGET_FPS,

            bird_size: BIRD_SIZE,
            bird_x: BIRD_X,
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,

            obstacle_width: OBSTACLE_WIDTH,
            gap_size: GAP_SIZE,
            obstacle_velocity: OBSTACLE_VELOCITY,
            spawn_distance: SPAWN_DISTANCE,
            min_top_height: MIN_TOP_HEIGHT,
            max_top_height: MAX_TOP_HEIGHT,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the file named by `FLAPPY_GATES_CONFIG`, or defaults if unset
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => {
                log::info!("Loading config from {}", path.to_string_lossy());
                let json = std::fs::read_to_string(&path)?;
                Self::from_json(&json)
            }
            None => {
                log::info!("Using default config");
                Ok(Self::default())
            }
        }
    }

    /// Inclusive range of whole-pixel top barrier heights
    pub fn top_height_bounds(&self) -> (u32, u32) {
        (
            self.min_top_height.ceil() as u32,
            self.max_top_height.floor() as u32,
        )
    }

    /// Reject geometry that would make spawning or play impossible
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("bird_size", self.bird_size),
            ("bird_x", self.bird_x),
            ("gravity", self.gravity),
            ("jump_velocity", self.jump_velocity),
            ("obstacle_width", self.obstacle_width),
            ("gap_size", self.gap_size),
            ("obstacle_velocity", self.obstacle_velocity),
            ("spawn_distance", self.spawn_distance),
            ("min_top_height", self.min_top_height),
            ("max_top_height", self.max_top_height),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::invalid(field, "must be finite"));
            }
        }

        for (field, value) in [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("bird_size", self.bird_size),
            ("obstacle_width", self.obstacle_width),
            ("gap_size", self.gap_size),
            ("spawn_distance", self.spawn_distance),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::invalid(field, format!("must be positive, got {value}")));
            }
        }

        if self.target_fps == 0 {
            return Err(ConfigError::invalid("target_fps", "must be positive"));
        }
        if self.gap_size >= self.screen_height {
            return Err(ConfigError::invalid(
                "gap_size",
                format!(
                    "gap {} must be smaller than screen height {}",
                    self.gap_size, self.screen_height
                ),
            ));
        }
        if self.bird_size >= self.gap_size {
            log::warn!(
                "Bird size {} does not fit through gap {}; every run will end at the first gate",
                self.bird_size,
                self.gap_size
            );
        }
        if self.bird_x < 0.0 || self.bird_x > self.screen_width {
            return Err(ConfigError::invalid("bird_x", "must lie on screen"));
        }
        if self.jump_velocity >= 0.0 {
            return Err(ConfigError::invalid("jump_velocity", "must be negative (upward)"));
        }
        if self.obstacle_velocity >= 0.0 {
            return Err(ConfigError::invalid(
                "obstacle_velocity",
                "must be negative (scrolling left)",
            ));
        }
        if self.min_top_height < 0.0 {
            return Err(ConfigError::invalid("min_top_height", "must not be negative"));
        }
        if self.max_top_height < self.min_top_height {
            return Err(ConfigError::invalid(
                "max_top_height",
                format!(
                    "range {}..={} is inverted",
                    self.min_top_height, self.max_top_height
                ),
            ));
        }
        let (lo, hi) = self.top_height_bounds();
        if lo > hi {
            return Err(ConfigError::invalid(
                "max_top_height",
                format!(
                    "range {}..={} holds no whole pixel height",
                    self.min_top_height, self.max_top_height
                ),
            ));
        }
        if hi as f32 + self.gap_size > self.screen_height {
            return Err(ConfigError::invalid(
                "max_top_height",
                format!(
                    "gate would extend below the screen ({} + {} > {})",
                    hi, self.gap_size, self.screen_height
                ),
            ));
        }

        Ok(())
    }
}
