//! Fixed-step simulation tick and input dispatch
//!
//! The caller owns the loop: drain input events into [`handle_input`] (or hand
//! them all to [`frame`]), then call [`tick`] once per frame.

use super::collision::{Collision, award_passes, check_collision};
use super::state::{GamePhase, GameState};

/// Logical input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Flap / start / restart
    Jump,
    /// Leave the game loop
    Quit,
}

/// Whether the loop should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// What happened during one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// A new obstacle entered at the right edge
    pub spawned: bool,
    /// Points credited this tick
    pub scored: u32,
    /// Set on the tick the run ended
    pub collision: Option<Collision>,
}

/// Apply one input event to the state machine
pub fn handle_input(state: &mut GameState, event: InputEvent) -> Control {
    match event {
        InputEvent::Quit => return Control::Quit,
        InputEvent::Jump => match state.phase {
            GamePhase::NotStarted => {
                state.phase = GamePhase::Running;
                state.runs += 1;
                state.bird.jump(state.config.jump_velocity);
                log::info!("Run {} started", state.runs);
            }
            GamePhase::Running => {
                state.bird.jump(state.config.jump_velocity);
            }
            GamePhase::GameOver => {
                state.reset();
            }
        },
    }
    Control::Continue
}

/// Advance the game state by one tick. Does nothing outside `Running`.
pub fn tick(state: &mut GameState) -> TickReport {
    let mut report = TickReport::default();
    if state.phase != GamePhase::Running {
        return report;
    }

    state.time_ticks += 1;

    state.bird.step(state.config.gravity);
    report.spawned = state.obstacles.update(&mut state.rng, &state.config);

    report.scored = award_passes(&mut state.obstacles, state.bird.x);
    state.score += report.scored;

    report.collision = check_collision(
        &state.bird.bounding_box(),
        &state.obstacles,
        state.config.screen_height,
    );
    if let Some(collision) = report.collision {
        state.phase = GamePhase::GameOver;
        log::info!(
            "Game over after {} ticks: score {} ({:?})",
            state.time_ticks,
            state.score,
            collision
        );
    }

    report
}

/// Apply this frame's events in order, then tick. Stops at the first quit.
pub fn frame<I>(state: &mut GameState, events: I) -> (Control, TickReport)
where
    I: IntoIterator<Item = InputEvent>,
{
    for event in events {
        if handle_input(state, event) == Control::Quit {
            return (Control::Quit, TickReport::default());
        }
    }
    (Control::Continue, tick(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::GameConfig;
    use crate::sim::state::Obstacle;

    fn run_until_game_over(state: &mut GameState, max_ticks: u32) -> u32 {
        for n in 1..=max_ticks {
            tick(state);
            if state.phase == GamePhase::GameOver {
                return n;
            }
        }
        panic!("no game over within {} ticks", max_ticks);
    }

    #[test]
    fn test_tick_not_started_is_frozen() {
        let mut state = GameState::with_seed(12345);
        let before = state.snapshot();
        for _ in 0..10 {
            let report = tick(&mut state);
            assert_eq!(report, TickReport::default());
        }
        assert_eq!(state.snapshot(), before);
    }

    #[test]
    fn test_jump_starts_run() {
        let mut state = GameState::with_seed(12345);
        assert_eq!(handle_input(&mut state, InputEvent::Jump), Control::Continue);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.bird.vel, state.config.jump_velocity);
        assert_eq!(state.runs, 1);
    }

    #[test]
    fn test_jump_while_running_overwrites_velocity() {
        let mut state = GameState::with_seed(12345);
        handle_input(&mut state, InputEvent::Jump);
        for _ in 0..5 {
            tick(&mut state);
        }
        assert_ne!(state.bird.vel, state.config.jump_velocity);
        handle_input(&mut state, InputEvent::Jump);
        assert_eq!(state.bird.vel, state.config.jump_velocity);
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_quit_stops_frame() {
        let mut state = GameState::with_seed(1);
        handle_input(&mut state, InputEvent::Jump);
        let ticks = state.time_ticks;
        let (control, _) = frame(&mut state, [InputEvent::Quit, InputEvent::Jump]);
        assert_eq!(control, Control::Quit);
        assert_eq!(state.time_ticks, ticks);
    }

    #[test]
    fn test_falls_to_floor() {
        let mut state = GameState::with_seed(2);
        handle_input(&mut state, InputEvent::Jump);
        let n = run_until_game_over(&mut state, 200);
        // y(n) = 300 - 8n + 0.25n(n+1) first reaches 585 at n = 53
        assert_eq!(n, 53);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_game_over_freezes_simulation() {
        let mut state = GameState::with_seed(3);
        handle_input(&mut state, InputEvent::Jump);
        run_until_game_over(&mut state, 200);

        let frozen = state.snapshot();
        for _ in 0..30 {
            assert_eq!(tick(&mut state), TickReport::default());
        }
        assert_eq!(state.snapshot(), frozen);
    }

    #[test]
    fn test_reset_restores_initial_snapshot() {
        let mut state = GameState::with_seed(4);
        let initial = state.snapshot();

        handle_input(&mut state, InputEvent::Jump);
        run_until_game_over(&mut state, 200);
        assert_ne!(state.snapshot(), initial);

        handle_input(&mut state, InputEvent::Jump);
        assert_eq!(state.snapshot(), initial);
        assert_eq!(state.phase, GamePhase::NotStarted);
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_restart_and_start_in_one_frame() {
        let mut state = GameState::with_seed(5);
        handle_input(&mut state, InputEvent::Jump);
        run_until_game_over(&mut state, 200);

        let (control, report) = frame(&mut state, [InputEvent::Jump, InputEvent::Jump]);
        assert_eq!(control, Control::Continue);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.runs, 2);
        assert!(report.spawned);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_end_to_end_forced_collision() {
        let mut state = GameState::with_seed(6);
        assert_eq!(state.phase, GamePhase::NotStarted);
        assert_eq!(state.score, 0);

        handle_input(&mut state, InputEvent::Jump);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.bird.vel, -8.0);

        let y0 = state.bird.y;
        for n in 1..=40 {
            let report = tick(&mut state);
            assert_eq!(report.collision, None);
            let nf = n as f32;
            assert_eq!(state.bird.vel, -8.0 + 0.5 * nf);
            assert_eq!(state.bird.y, y0 - 8.0 * nf + 0.25 * nf * (nf + 1.0));
        }
        assert_eq!(state.bird.y, 390.0);

        // Place a tall top barrier that lands on the bird after this tick's scroll
        state.obstacles.clear();
        let id = state.obstacles.push(Obstacle {
            id: 0,
            x: 94.0,
            width: 70.0,
            top_height: 450.0,
            gap: 150.0,
            screen_height: 600.0,
            passed: false,
        });

        let report = tick(&mut state);
        assert_eq!(report.collision, Some(Collision::Obstacle { id }));
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.time_ticks, 41);

        let frozen = state.snapshot();
        for _ in 0..20 {
            tick(&mut state);
        }
        assert_eq!(state.snapshot(), frozen);
    }

    #[test]
    fn test_each_obstacle_scores_once() {
        // Wide fixed gate so a simple hover keeps the bird alive
        let config = GameConfig {
            gap_size: 500.0,
            min_top_height: 50.0,
            max_top_height: 50.0,
            ..Default::default()
        };
        let mut state = GameState::new(config, 7).unwrap();
        let mut seen_passed = std::collections::BTreeSet::new();

        for _ in 0..600 {
            let events: Vec<InputEvent> = if state.phase == GamePhase::NotStarted
                || state.bird.y > 300.0
            {
                vec![InputEvent::Jump]
            } else {
                vec![]
            };
            frame(&mut state, events);
            assert_eq!(state.phase, GamePhase::Running);
            for o in state.obstacles.iter() {
                if o.right() < state.bird.x {
                    seen_passed.insert(o.id);
                }
            }
            assert_eq!(state.score as usize, seen_passed.len());
        }
        assert!(state.score >= 3, "score {}", state.score);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::with_seed(99999);
        let mut state2 = GameState::with_seed(99999);

        let inputs = [
            vec![InputEvent::Jump],
            vec![],
            vec![],
            vec![InputEvent::Jump],
            vec![],
        ];

        for _ in 0..20 {
            for events in &inputs {
                frame(&mut state1, events.iter().copied());
                frame(&mut state2, events.iter().copied());
            }
        }

        assert_eq!(state1.snapshot(), state2.snapshot());
        assert_eq!(state1.rng, state2.rng);
    }
}
