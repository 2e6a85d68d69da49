// Easy tier: chase the ball's current height, no prediction.

use glam::Vec2;

use crate::game::Ball;

use super::policy::BotPolicy;

pub struct ReactiveBot;

impl BotPolicy for ReactiveBot {
    fn target_y(&mut self, ball: &Ball, _prev_center: Vec2) -> f32 {
        ball.center.y
    }

    fn paddle_step(&self) -> f32 {
        5.0
    }

    fn reset(&mut self) {}

    fn name(&self) -> &'static str {
        "reactive"
    }
}
