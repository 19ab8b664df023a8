//! Obstacle generation and the scrolling obstacle field

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::Obstacle;
use crate::settings::GameConfig;

/// Create an obstacle at the right edge with a randomly placed gate.
///
/// The top barrier height is a whole number of pixels drawn uniformly from
/// the configured range; the gate sits directly below it and the bottom
/// barrier fills the rest of the screen.
pub fn generate_obstacle<R: Rng>(rng: &mut R, id: u32, config: &GameConfig) -> Obstacle {
    let (lo, hi) = config.top_height_bounds();
    let top_height = rng.random_range(lo..=hi) as f32;

    Obstacle {
        id,
        x: config.screen_width,
        width: config.obstacle_width,
        top_height,
        gap: config.gap_size,
        screen_height: config.screen_height,
        passed: false,
    }
}

/// Live obstacles ordered by spawn time (leftmost first)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObstacleField {
    obstacles: Vec<Obstacle>,
    /// Next obstacle id; never reused, survives `clear`
    next_id: u32,
}

impl ObstacleField {
    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Obstacle> {
        self.obstacles.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Obstacle> {
        self.obstacles.iter_mut()
    }

    pub fn as_slice(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Most recently spawned obstacle
    pub fn newest(&self) -> Option<&Obstacle> {
        self.obstacles.last()
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    fn allocate_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Append an obstacle and return its id.
    ///
    /// The field owns id allocation: whatever `obstacle.id` the caller set is
    /// replaced with the next fresh id.
    pub fn push(&mut self, mut obstacle: Obstacle) -> u32 {
        debug_assert!(
            self.newest().is_none_or(|last| last.x <= obstacle.x),
            "obstacles must be appended in x order"
        );
        obstacle.id = self.allocate_id();
        let id = obstacle.id;
        self.obstacles.push(obstacle);
        id
    }

    /// True if the field is empty or the newest obstacle has scrolled past
    /// the spawn threshold
    pub fn should_spawn(&self, config: &GameConfig) -> bool {
        match self.newest() {
            None => true,
            Some(last) => last.x < config.screen_width - config.spawn_distance,
        }
    }

    /// Generate one obstacle at the right edge and append it. Returns the id.
    pub fn spawn<R: Rng>(&mut self, rng: &mut R, config: &GameConfig) -> u32 {
        let id = self.allocate_id();
        let obstacle = generate_obstacle(rng, id, config);
        log::debug!(
            "Spawned obstacle {} (gate {}..{})",
            id,
            obstacle.top_height,
            obstacle.bottom_y()
        );
        self.obstacles.push(obstacle);
        id
    }

    /// Shift every obstacle horizontally by `dx`
    pub fn advance(&mut self, dx: f32) {
        for obstacle in &mut self.obstacles {
            obstacle.x += dx;
        }
    }

    /// Drop obstacles fully left of the screen, keeping order. Returns how
    /// many were removed.
    pub fn prune(&mut self) -> usize {
        let before = self.obstacles.len();
        self.obstacles.retain(|o| !o.is_off_screen());
        let removed = before - self.obstacles.len();
        if removed > 0 {
            log::trace!("Pruned {} obstacle(s)", removed);
        }
        removed
    }

    /// Per-tick update: spawn if due, scroll, prune. Returns true if an
    /// obstacle was spawned.
    pub fn update<R: Rng>(&mut self, rng: &mut R, config: &GameConfig) -> bool {
        let spawned = self.should_spawn(config);
        if spawned {
            self.spawn(rng, config);
        }
        self.advance(config.obstacle_velocity);
        self.prune();
        spawned
    }
}
