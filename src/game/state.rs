use glam::Vec2;
use tracing::debug;

use crate::effects::{Effects, SoundCue, BALL_SPARK, PADDLE_SPARK};

use super::collision::{classify, Collision};
use super::field::{
    BALL_SPEED, BOT_PADDLE_X, PADDLE_HEIGHT, PADDLE_WIDTH, PLAYER_PADDLE_X, PLAY_AREA_BOTTOM,
    PLAY_AREA_TOP, SCREEN_HEIGHT, SCREEN_WIDTH, WIN_SCORE,
};

/// The ball, tagged with the collision it resolved this tick.
///
/// The tag is recomputed from geometry every tick; it only persists long
/// enough to drive the current tick's branch and the bot's trigger checks.
#[derive(Debug, Clone)]
pub struct Ball {
    pub center: Vec2,
    pub collision: Collision,
}

impl Ball {
    pub fn at(center: Vec2) -> Self {
        Self {
            center,
            collision: Collision::None,
        }
    }
}

/// An axis-aligned paddle. `x` is fixed for the whole session, only `y`
/// moves.
#[derive(Debug, Clone)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
        }
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// True while the paddle top is strictly below the upper border.
    pub fn can_move_up(&self) -> bool {
        self.y > PLAY_AREA_TOP
    }

    /// True while the paddle bottom is strictly above the lower border.
    pub fn can_move_down(&self) -> bool {
        self.y + self.height < PLAY_AREA_BOTTOM
    }

    pub fn move_up(&mut self, step: f32) {
        if self.can_move_up() {
            self.y -= step;
        }
    }

    pub fn move_down(&mut self, step: f32) {
        if self.can_move_down() {
            self.y += step;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,
    Bot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    Playing,
    Over,
}

/// All round-scoped state: ball, paddles, scores, speed and phase.
#[derive(Debug, Clone)]
pub struct RoundState {
    pub ball: Ball,
    /// Ball center before the last motion step. Velocity is implicit:
    /// recovered each tick as `ball.center - prev_center`. Equal centers
    /// are the "just reset" sentinel.
    pub prev_center: Vec2,
    pub player: Paddle,
    pub bot: Paddle,
    pub player_score: u32,
    pub bot_score: u32,
    /// Scalar ball speed, non-decreasing within a rally.
    pub speed: f32,
    pub phase: RoundPhase,
}

impl RoundState {
    pub fn new() -> Self {
        let center = Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0);
        let paddle_y = SCREEN_HEIGHT / 2.0 - PADDLE_HEIGHT / 2.0;
        Self {
            ball: Ball::at(center),
            prev_center: center,
            player: Paddle::new(PLAYER_PADDLE_X, paddle_y),
            bot: Paddle::new(BOT_PADDLE_X, paddle_y),
            player_score: 0,
            bot_score: 0,
            speed: BALL_SPEED,
            phase: RoundPhase::Playing,
        }
    }

    /// Put the ball back at the center with the reset sentinel armed and
    /// the speed restored to base. The next motion step serves it.
    pub fn reset_ball(&mut self) {
        let center = Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0);
        self.ball = Ball::at(center);
        self.prev_center = center;
        self.speed = BALL_SPEED;
    }

    /// Check for a ball that crossed a scoring border, before the motion
    /// step runs. Classification priority guarantees a ball past a border
    /// is scored even if it also overlaps a paddle.
    pub fn resolve_score(&mut self, effects: &mut Effects) -> Option<Side> {
        let scorer = match classify(self.ball.center, &self.player, &self.bot) {
            Collision::LeftWall => Side::Bot,
            Collision::RightWall => Side::Player,
            _ => return None,
        };
        self.award_point(scorer, effects);
        Some(scorer)
    }

    fn award_point(&mut self, side: Side, effects: &mut Effects) {
        effects.play(SoundCue::Score);
        match side {
            Side::Player => {
                self.player_score += 1;
                effects.burst(
                    Vec2::new(SCREEN_WIDTH - 50.0, SCREEN_HEIGHT / 2.0),
                    PADDLE_SPARK,
                    30,
                );
            }
            Side::Bot => {
                self.bot_score += 1;
                effects.burst(Vec2::new(50.0, SCREEN_HEIGHT / 2.0), BALL_SPARK, 30);
            }
        }
        debug!(
            player = self.player_score,
            bot = self.bot_score,
            "point scored"
        );
        self.reset_ball();
        if self.player_score >= WIN_SCORE || self.bot_score >= WIN_SCORE {
            self.phase = RoundPhase::Over;
        }
    }

    pub fn winner(&self) -> Option<Side> {
        if self.player_score >= WIN_SCORE {
            Some(Side::Player)
        } else if self.bot_score >= WIN_SCORE {
            Some(Side::Bot)
        } else {
            None
        }
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::new()
    }
}
