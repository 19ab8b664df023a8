//! Demo mode - a simple controller that plays the game
//!
//! Aims slightly below the center of the next gate and flaps whenever the bird
//! sinks past that point. Not optimal, but good enough to pass a few gates.

use super::state::{GamePhase, GameState};

/// How far below the gate center the bird is allowed to sink before flapping
const AIM_BELOW_CENTER: f32 = 20.0;

/// Vertical aim point for the bird: the next gate, or mid-screen if none
pub fn target_y(state: &GameState) -> f32 {
    let bird_left = state.bird.bounding_box().left();
    state
        .obstacles
        .iter()
        .find(|o| o.right() >= bird_left)
        .map(|o| o.gate_center() + AIM_BELOW_CENTER)
        .unwrap_or(state.config.screen_height / 2.0)
}

/// Whether the autopilot presses jump this frame
pub fn wants_jump(state: &GameState) -> bool {
    match state.phase {
        GamePhase::NotStarted | GamePhase::GameOver => true,
        GamePhase::Running => state.bird.vel >= 0.0 && state.bird.y > target_y(state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::tick::{InputEvent, handle_input, tick};

    fn running_state() -> GameState {
        let mut state = GameState::with_seed(21);
        handle_input(&mut state, InputEvent::Jump);
        state
    }

    #[test]
    fn test_starts_and_restarts() {
        let mut state = GameState::with_seed(21);
        assert!(wants_jump(&state));
        state.phase = GamePhase::GameOver;
        assert!(wants_jump(&state));
    }

    #[test]
    fn test_target_defaults_to_mid_screen() {
        let state = running_state();
        assert!(state.obstacles.is_empty());
        assert_eq!(target_y(&state), 300.0);
    }

    #[test]
    fn test_targets_next_gate() {
        let mut state = running_state();
        tick(&mut state);
        let gate = state.obstacles.as_slice()[0].gate_center();
        assert_eq!(target_y(&state), gate + AIM_BELOW_CENTER);
    }

    #[test]
    fn test_flaps_only_when_sinking_below_target() {
        let mut state = running_state();
        let target = target_y(&state);

        state.bird.y = target + 5.0;
        state.bird.vel = 2.0;
        assert!(wants_jump(&state));

        // Still rising from the last flap
        state.bird.vel = -3.0;
        assert!(!wants_jump(&state));

        state.bird.y = target - 5.0;
        state.bird.vel = 2.0;
        assert!(!wants_jump(&state));
    }

    #[test]
    fn test_keeps_bird_airborne_without_obstacles_nearby() {
        let mut state = running_state();
        // First obstacle reaches the bird after ~70 ticks
        for _ in 0..60 {
            if wants_jump(&state) {
                handle_input(&mut state, InputEvent::Jump);
            }
            tick(&mut state);
        }
        assert_eq!(state.phase, GamePhase::Running);
    }
}
