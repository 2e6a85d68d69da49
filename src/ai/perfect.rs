// Hard tier: full bounce-reflecting prediction of the right-border
// intercept, with a faster paddle.

use glam::Vec2;

use crate::game::collision::Collision;
use crate::game::field::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::game::prediction::right_border_collision;
use crate::game::Ball;

use super::policy::BotPolicy;

/// Recomputes the eventual right-border landing point, simulating wall
/// bounces, each time the ball leaves the player paddle, then glides to
/// that fixed target until the next player contact.
pub struct PerfectBot {
    predicted: Ball,
}

impl PerfectBot {
    pub fn new() -> Self {
        Self {
            predicted: Ball::at(Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0)),
        }
    }
}

impl BotPolicy for PerfectBot {
    fn target_y(&mut self, ball: &Ball, prev_center: Vec2) -> f32 {
        if ball.collision == Collision::PlayerPaddle {
            self.predicted = right_border_collision(ball, prev_center);
        }
        self.predicted.center.y
    }

    fn paddle_step(&self) -> f32 {
        7.0
    }

    fn reset(&mut self) {
        self.predicted = Ball::at(Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0));
    }

    fn name(&self) -> &'static str {
        "perfect"
    }
}

impl Default for PerfectBot {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::field::{BALL_RADIUS, PLAY_AREA_BOTTOM, PLAY_AREA_TOP};

    #[test]
    fn player_hit_locks_in_the_landing_point() {
        let mut bot = PerfectBot::new();
        let mut ball = Ball::at(Vec2::new(52.0, 300.0));
        ball.collision = Collision::PlayerPaddle;
        let prev = ball.center - Vec2::new(4.0, 0.0);

        let target = bot.target_y(&ball, prev);
        assert_eq!(bot.predicted.collision, Collision::RightWall);
        assert_eq!(target, 300.0);
        assert_eq!(bot.paddle_step(), 7.0);
    }

    #[test]
    fn prediction_survives_real_wall_bounces() {
        let mut bot = PerfectBot::new();
        // Up-and-right off the player paddle; the real ball will bounce
        // off the top, and the bot bakes that bounce into its one-shot
        // prediction instead of re-reacting to it.
        let mut ball = Ball::at(Vec2::new(52.0, 200.0));
        ball.collision = Collision::PlayerPaddle;
        let prev = ball.center - Vec2::new(4.0, -3.0);

        let target = bot.target_y(&ball, prev);
        assert!(target >= PLAY_AREA_TOP && target <= PLAY_AREA_BOTTOM);

        // The bounce itself is not a trigger for the hard tier.
        let mut bounced = Ball::at(Vec2::new(600.0, PLAY_AREA_TOP + BALL_RADIUS + 2.0));
        bounced.collision = Collision::UpperWall;
        let bounced_prev = bounced.center - Vec2::new(4.0, 3.0);
        assert_eq!(bot.target_y(&bounced, bounced_prev), target);
    }

    #[test]
    fn fresh_bot_holds_center() {
        let mut bot = PerfectBot::new();
        let ball = Ball::at(Vec2::new(800.0, 100.0));
        let prev = ball.center - Vec2::new(-4.0, 0.0);
        assert_eq!(bot.target_y(&ball, prev), SCREEN_HEIGHT / 2.0);
    }
}
