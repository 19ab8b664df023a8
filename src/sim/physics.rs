//! Vertical motion of the bird
//!
//! Semi-implicit Euler with one tick as the time unit: velocity first, then
//! position from the new velocity.

use super::state::Bird;

/// One integration step, returning `(velocity, position)`
#[inline]
pub fn integrate(velocity: f32, position: f32, gravity: f32) -> (f32, f32) {
    let velocity = velocity + gravity;
    (velocity, position + velocity)
}

impl Bird {
    /// Advance by one tick under `gravity`
    pub fn step(&mut self, gravity: f32) {
        let (vel, y) = integrate(self.vel, self.y, gravity);
        self.vel = vel;
        self.y = y;
    }

    /// Overwrite velocity with the jump impulse (does not accumulate)
    pub fn jump(&mut self, jump_velocity: f32) {
        self.vel = jump_velocity;
    }
}
