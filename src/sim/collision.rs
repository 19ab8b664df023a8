//! Collision detection and scoring
//!
//! Exact rectangle tests: the bird's square box against both barriers of
//! every live obstacle, then the top and bottom of the screen.

use super::obstacles::ObstacleField;
use super::rect::Rect;

/// What the bird hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// A barrier of the obstacle with this id
    Obstacle { id: u32 },
    /// Top of the screen
    Ceiling,
    /// Bottom of the screen
    Floor,
}

/// Find the first collision, checking obstacles in field order, then the
/// ceiling, then the floor
pub fn check_collision(
    bird_box: &Rect,
    obstacles: &ObstacleField,
    screen_height: f32,
) -> Option<Collision> {
    for obstacle in obstacles.iter() {
        if bird_box.intersects(&obstacle.top_rect()) || bird_box.intersects(&obstacle.bottom_rect())
        {
            return Some(Collision::Obstacle { id: obstacle.id });
        }
    }
    if bird_box.top() <= 0.0 {
        return Some(Collision::Ceiling);
    }
    if bird_box.bottom() >= screen_height {
        return Some(Collision::Floor);
    }
    None
}

/// Credit every obstacle whose right edge is strictly left of `bird_x` and
/// that has not been credited before. Returns the number newly credited.
pub fn award_passes(obstacles: &mut ObstacleField, bird_x: f32) -> u32 {
    let mut credited = 0;
    for obstacle in obstacles.iter_mut() {
        if !obstacle.passed && obstacle.right() < bird_x {
            obstacle.passed = true;
            credited += 1;
            log::debug!("Passed obstacle {}", obstacle.id);
        }
    }
    credited
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Obstacle;
    use glam::Vec2;

    const H: f32 = 600.0;

    fn field_with(x: f32, top_height: f32) -> ObstacleField {
        let mut field = ObstacleField::default();
        field.push(Obstacle {
            id: 0,
            x,
            width: 70.0,
            top_height,
            gap: 150.0,
            screen_height: H,
            passed: false,
        });
        field
    }

    #[test]
    fn test_clear_gate_no_collision() {
        // Gate spans y 200..350, bird centered in it
        let field = field_with(90.0, 200.0);
        let bird = Rect::centered(Vec2::new(100.0, 275.0), 30.0);
        assert_eq!(check_collision(&bird, &field, H), None);
    }

    #[test]
    fn test_top_barrier_boundary_exactness() {
        let field = field_with(90.0, 200.0);
        let id = field.as_slice()[0].id;

        // Box top at 199: overlaps the top barrier by 1
        let overlapping = Rect::new(85.0, 199.0, 30.0, 30.0);
        assert_eq!(
            check_collision(&overlapping, &field, H),
            Some(Collision::Obstacle { id })
        );

        // Box top at 201: 1 unit clear
        let clear = Rect::new(85.0, 201.0, 30.0, 30.0);
        assert_eq!(check_collision(&clear, &field, H), None);
    }

    #[test]
    fn test_bottom_barrier_boundary_exactness() {
        // Bottom barrier starts at y = 350
        let field = field_with(90.0, 200.0);
        let overlapping = Rect::new(85.0, 321.0, 30.0, 30.0);
        assert!(check_collision(&overlapping, &field, H).is_some());
        let clear = Rect::new(85.0, 319.0, 30.0, 30.0);
        assert_eq!(check_collision(&clear, &field, H), None);
    }

    #[test]
    fn test_horizontal_boundary_exactness() {
        // Barrier occupies x 200..270, bird level with the top barrier
        let field = field_with(200.0, 200.0);
        let overlapping = Rect::new(171.0, 50.0, 30.0, 30.0);
        assert!(check_collision(&overlapping, &field, H).is_some());
        let clear = Rect::new(169.0, 50.0, 30.0, 30.0);
        assert_eq!(check_collision(&clear, &field, H), None);
    }

    #[test]
    fn test_screen_bounds() {
        let empty = ObstacleField::default();
        assert_eq!(
            check_collision(&Rect::new(85.0, 0.0, 30.0, 30.0), &empty, H),
            Some(Collision::Ceiling)
        );
        assert_eq!(check_collision(&Rect::new(85.0, 1.0, 30.0, 30.0), &empty, H), None);
        assert_eq!(
            check_collision(&Rect::new(85.0, 570.0, 30.0, 30.0), &empty, H),
            Some(Collision::Floor)
        );
        assert_eq!(check_collision(&Rect::new(85.0, 569.0, 30.0, 30.0), &empty, H), None);
    }

    #[test]
    fn test_obstacle_reported_before_bounds() {
        // Touching the ceiling inside a barrier reports the barrier
        let field = field_with(90.0, 200.0);
        let id = field.as_slice()[0].id;
        let bird = Rect::new(85.0, -5.0, 30.0, 30.0);
        assert_eq!(check_collision(&bird, &field, H), Some(Collision::Obstacle { id }));
    }

    #[test]
    fn test_award_passes_once() {
        let mut field = field_with(20.0, 200.0);
        // Right edge 90 < 100
        assert_eq!(award_passes(&mut field, 100.0), 1);
        assert!(field.as_slice()[0].passed);
        for _ in 0..10 {
            assert_eq!(award_passes(&mut field, 100.0), 0);
        }
    }

    #[test]
    fn test_award_requires_strictly_left() {
        // Right edge exactly at bird x
        let mut field = field_with(30.0, 200.0);
        assert_eq!(award_passes(&mut field, 100.0), 0);
        field.advance(-1.0);
        assert_eq!(award_passes(&mut field, 100.0), 1);
    }

    #[test]
    fn test_credit_survives_pruning() {
        // Two passed-by obstacles; pruning the first must not re-credit the second
        let mut field = field_with(10.0, 200.0);
        field.push(Obstacle {
            id: 0,
            x: 20.0,
            width: 70.0,
            top_height: 150.0,
            gap: 150.0,
            screen_height: H,
            passed: false,
        });
        assert_eq!(award_passes(&mut field, 100.0), 2);

        field.advance(-80.0);
        assert_eq!(field.prune(), 1);
        assert_eq!(award_passes(&mut field, 100.0), 0);
    }
}
