// Trajectory extrapolation used by the predictive bot tiers.
//
// Both functions assume straight-line motion between discrete samples equal
// to the last observed per-tick displacement. That is an approximation, not
// a continuous ray cast, but per-tick displacement is small relative to the
// field so the error stays within a ball radius.

use glam::Vec2;

use super::collision::{classify_walls, Collision};
use super::state::Ball;

/// Upper bound on simulated wall bounces. Near-horizontal trajectories can
/// bounce indefinitely; past the cap the last computed point is returned as
/// a best-effort estimate.
const MAX_REFLECTIONS: u32 = 10;

/// Step the ball forward by its implied displacement until it classifies
/// against a border (walls only; paddles are ignored).
///
/// Callers must guarantee a nonzero displacement between `ball.center` and
/// `prev_center`, otherwise the loop cannot progress.
pub fn point_of_collision(ball: &Ball, prev_center: Vec2) -> Ball {
    let velocity = ball.center - prev_center;
    debug_assert!(velocity != Vec2::ZERO, "prediction needs a moving ball");

    let mut probe = Ball {
        center: ball.center,
        collision: classify_walls(ball.center),
    };
    while probe.collision == Collision::None {
        probe.center += velocity;
        probe.collision = classify_walls(probe.center);
    }
    probe
}

/// Extrapolate through horizontal-wall bounces to the eventual right-border
/// intercept, ignoring the far paddle. Each Upper/Lower result reflects the
/// vertical displacement and re-runs the point search from the bounce.
pub fn right_border_collision(ball: &Ball, prev_center: Vec2) -> Ball {
    let mut hit = point_of_collision(ball, prev_center);
    let mut velocity = ball.center - prev_center;
    let mut bounces = 0;

    while hit.collision != Collision::RightWall && bounces < MAX_REFLECTIONS {
        match hit.collision {
            Collision::UpperWall | Collision::LowerWall => {
                velocity.y = -velocity.y;
                let from = hit.center;
                hit = point_of_collision(&Ball::at(from + velocity), from);
                bounces += 1;
            }
            _ => break,
        }
    }
    hit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::field::{BALL_RADIUS, PLAY_AREA_BOTTOM, PLAY_AREA_TOP, SCREEN_WIDTH};

    fn moving_ball(center: Vec2, velocity: Vec2) -> (Ball, Vec2) {
        (Ball::at(center), center - velocity)
    }

    #[test]
    fn horizontal_ball_reaches_right_wall() {
        let (ball, prev) = moving_ball(Vec2::new(800.0, 450.0), Vec2::new(4.0, 0.0));
        let hit = point_of_collision(&ball, prev);
        assert_eq!(hit.collision, Collision::RightWall);
        assert!(hit.center.x > SCREEN_WIDTH - BALL_RADIUS);
        assert_eq!(hit.center.y, 450.0);
    }

    #[test]
    fn steep_ball_hits_upper_wall_first() {
        let (ball, prev) = moving_ball(Vec2::new(800.0, 450.0), Vec2::new(1.0, -8.0));
        let hit = point_of_collision(&ball, prev);
        assert_eq!(hit.collision, Collision::UpperWall);
        assert!(hit.center.y < PLAY_AREA_TOP + BALL_RADIUS);
    }

    #[test]
    fn leftward_ball_reaches_left_wall() {
        let (ball, prev) = moving_ball(Vec2::new(300.0, 450.0), Vec2::new(-4.0, 0.0));
        let hit = point_of_collision(&ball, prev);
        assert_eq!(hit.collision, Collision::LeftWall);
    }

    #[test]
    fn right_border_prediction_passes_through_bounces() {
        // Up-and-right at 45 degrees: bounces off the top, then lands on
        // the right border.
        let (ball, prev) = moving_ball(Vec2::new(800.0, 200.0), Vec2::new(4.0, -4.0));
        let hit = right_border_collision(&ball, prev);
        assert_eq!(hit.collision, Collision::RightWall);
        assert!(hit.center.x > SCREEN_WIDTH - BALL_RADIUS);
        assert!(hit.center.y >= PLAY_AREA_TOP);
        assert!(hit.center.y <= PLAY_AREA_BOTTOM);
    }

    #[test]
    fn right_border_prediction_matches_reflected_geometry() {
        // Gentle diagonal with no bounce: intercept y is just linear
        // extrapolation to the right border.
        let (ball, prev) = moving_ball(Vec2::new(1000.0, 450.0), Vec2::new(4.0, 1.0));
        let hit = right_border_collision(&ball, prev);
        assert_eq!(hit.collision, Collision::RightWall);
        let steps = ((SCREEN_WIDTH - BALL_RADIUS - 1000.0) / 4.0).ceil();
        assert!((hit.center.y - (450.0 + steps)).abs() <= 1.0);
    }

    #[test]
    fn near_horizontal_zigzag_terminates_at_cap() {
        // Mostly vertical displacement: the trajectory ping-pongs between
        // the walls and exhausts the reflection cap. The result is a
        // best-effort point, still somewhere on a horizontal border.
        let (ball, prev) = moving_ball(Vec2::new(800.0, 450.0), Vec2::new(0.2, 6.0));
        let hit = right_border_collision(&ball, prev);
        assert!(matches!(
            hit.collision,
            Collision::UpperWall | Collision::LowerWall | Collision::RightWall
        ));
    }

    #[test]
    fn leftward_prediction_stops_without_reflecting() {
        // A left-wall hit is not a horizontal bounce; the loop must not
        // try to reflect through it.
        let (ball, prev) = moving_ball(Vec2::new(300.0, 450.0), Vec2::new(-4.0, 1.0));
        let hit = right_border_collision(&ball, prev);
        assert_eq!(hit.collision, Collision::LeftWall);
    }
}
