//! Frame composition: what gets drawn for a given game state

use glam::Vec2;

use super::Canvas;
use super::vertex::colors;
use crate::sim::{GamePhase, GameState};

pub const START_HINT: &str = "Press SPACE to Start";
pub const GAME_OVER_TEXT: &str = "Game Over - SPACE to Restart";

/// Where the score label goes
pub const SCORE_POS: Vec2 = Vec2::new(10.0, 10.0);

/// Draw one frame of `state` (does not present)
pub fn draw_scene<C: Canvas + ?Sized>(state: &GameState, canvas: &mut C) {
    let config = &state.config;
    canvas.clear(colors::SKY);

    // Bird snaps to whole pixels vertically
    let bird = &state.bird;
    canvas.fill_circle(
        Vec2::new(bird.x, bird.y.trunc()),
        bird.radius().floor(),
        colors::BIRD,
    );

    for obstacle in state.obstacles.iter() {
        canvas.fill_rect(obstacle.top_rect(), colors::OBSTACLE);
        canvas.fill_rect(obstacle.bottom_rect(), colors::OBSTACLE);
    }

    canvas.text(&format!("Score: {}", state.score), SCORE_POS, colors::TEXT);

    let center = Vec2::new(config.screen_width / 2.0, config.screen_height / 2.0).floor();
    match state.phase {
        GamePhase::NotStarted => {
            canvas.text(START_HINT, center - Vec2::new(100.0, 0.0), colors::TEXT);
        }
        GamePhase::GameOver => {
            canvas.text(GAME_OVER_TEXT, center - Vec2::new(150.0, 0.0), colors::TEXT);
        }
        GamePhase::Running => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{Canvas, DrawCommand, DrawList};
    use crate::sim::{InputEvent, handle_input, tick};

    fn render(state: &GameState) -> DrawList {
        let mut list = DrawList::new();
        draw_scene(state, &mut list);
        list.present();
        list
    }

    #[test]
    fn test_not_started_shows_hint() {
        let state = GameState::with_seed(1);
        let list = render(&state);
        let texts: Vec<&str> = list.texts().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Score: 0", START_HINT]);
        assert_eq!(list.texts().nth(1).unwrap().pos, Vec2::new(100.0, 300.0));
        assert_eq!(list.last_frame[0], DrawCommand::Clear(colors::SKY));
    }

    #[test]
    fn test_running_has_no_overlay_and_draws_obstacles() {
        let mut state = GameState::with_seed(1);
        handle_input(&mut state, InputEvent::Jump);
        tick(&mut state);
        state.score = 3;

        let list = render(&state);
        let texts: Vec<&str> = list.texts().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Score: 3"]);
        assert_eq!(list.rect_count(), 2 * state.obstacles.len());
    }

    #[test]
    fn test_game_over_overlay() {
        let mut state = GameState::with_seed(1);
        state.phase = GamePhase::GameOver;
        let list = render(&state);
        let over = list.texts().find(|t| t.text == GAME_OVER_TEXT).unwrap();
        assert_eq!(over.pos, Vec2::new(50.0, 300.0));
    }

    #[test]
    fn test_bird_drawn_at_whole_pixel() {
        let mut state = GameState::with_seed(1);
        state.bird.y = 287.75;
        let list = render(&state);
        let circle = list
            .last_frame
            .iter()
            .find_map(|c| match c {
                DrawCommand::Circle { center, radius, .. } => Some((*center, *radius)),
                _ => None,
            })
            .unwrap();
        assert_eq!(circle, (Vec2::new(100.0, 287.0), 15.0));
    }
}
