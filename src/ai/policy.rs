// Bot policy seam: each difficulty tier computes a target y for the
// opponent paddle; a shared driver steps the paddle toward it.

use glam::Vec2;

use crate::game::{Ball, Paddle};

/// A movement policy for the opponent paddle.
///
/// Policies may cache a predicted intercept between triggering events; the
/// round loop calls `target_y` once per tick, after the motion step, with
/// the ball's resolved collision still tagged on it.
pub trait BotPolicy {
    /// The y-coordinate the paddle center should move toward this tick.
    fn target_y(&mut self, ball: &Ball, prev_center: Vec2) -> f32;

    /// Paddle movement per tick while chasing the target.
    fn paddle_step(&self) -> f32;

    /// Drop any cached prediction (round or rally restart).
    fn reset(&mut self);

    fn name(&self) -> &'static str;
}

/// Step the paddle toward `target_y`, bounded by the playfield borders.
/// The two comparisons are independent so a target inside the paddle's
/// span leaves it still.
pub fn drive_paddle(paddle: &mut Paddle, target_y: f32, step: f32) {
    let center = paddle.center_y();
    if target_y > center {
        paddle.move_down(step);
    }
    if target_y < center {
        paddle.move_up(step);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::field::{BOT_PADDLE_X, PLAY_AREA_BOTTOM, PLAY_AREA_TOP};

    #[test]
    fn driver_steps_toward_the_target() {
        let mut paddle = Paddle::new(BOT_PADDLE_X, 400.0);
        drive_paddle(&mut paddle, 700.0, 5.0);
        assert_eq!(paddle.y, 405.0);
        drive_paddle(&mut paddle, 100.0, 5.0);
        assert_eq!(paddle.y, 400.0);
    }

    #[test]
    fn driver_holds_when_on_target() {
        let mut paddle = Paddle::new(BOT_PADDLE_X, 400.0);
        let center = paddle.center_y();
        drive_paddle(&mut paddle, center, 5.0);
        assert_eq!(paddle.y, 400.0);
    }

    #[test]
    fn driver_stops_at_the_borders() {
        let mut paddle = Paddle::new(BOT_PADDLE_X, PLAY_AREA_TOP);
        drive_paddle(&mut paddle, 0.0, 7.0);
        assert_eq!(paddle.y, PLAY_AREA_TOP);

        paddle.y = PLAY_AREA_BOTTOM - paddle.height;
        drive_paddle(&mut paddle, PLAY_AREA_BOTTOM, 7.0);
        assert_eq!(paddle.y, PLAY_AREA_BOTTOM - paddle.height);
    }
}
