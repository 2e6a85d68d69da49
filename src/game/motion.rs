// Per-tick ball motion: collision resolution, velocity redirection, speed
// progression.

use glam::Vec2;
use rand::Rng;

use crate::effects::{Effects, SoundCue, BALL_SPARK, PADDLE_SPARK};

use super::collision::{classify, Collision};
use super::field::{BALL_RADIUS, BALL_SPEED, PLAY_AREA_BOTTOM, PLAY_AREA_TOP};
use super::state::{Paddle, RoundState};

/// How far the ball is pushed off a surface after a bounce, so the same
/// border or paddle cannot re-trigger on the next tick.
const SEPARATION: f32 = 2.0;

/// Serve direction cone in degrees. Always points at the player's side.
const SERVE_CONE_MIN_DEG: i32 = 120;
const SERVE_CONE_MAX_DEG: i32 = 240;

/// Advance the ball by one tick and return the collision it resolved.
///
/// Velocity is implicit: it is recovered by differencing `ball.center`
/// against `prev_center`, redirected according to the classification, then
/// re-applied. Equal centers mean the ball was just reset; that tick only
/// serves it in a random direction.
pub fn step(state: &mut RoundState, effects: &mut Effects, rng: &mut impl Rng) -> Collision {
    if state.prev_center == state.ball.center {
        let velocity = serve_direction(rng, BALL_SPEED);
        state.ball.collision = Collision::None;
        state.prev_center = state.ball.center;
        state.ball.center += velocity;
        return Collision::None;
    }

    state.ball.collision = classify(state.ball.center, &state.player, &state.bot);
    let mut velocity = state.ball.center - state.prev_center;

    match state.ball.collision {
        Collision::None | Collision::LeftWall | Collision::RightWall => {
            // Border exits are the session's concern; keep the trajectory.
        }
        Collision::UpperWall | Collision::LowerWall => {
            effects.play(SoundCue::WallHit);
            effects.burst(state.ball.center, PADDLE_SPARK, 8);
            velocity.y = -velocity.y;
            // Pull the ball back inside so the border cannot re-trigger.
            state.ball.center.y = if state.ball.collision == Collision::UpperWall {
                PLAY_AREA_TOP + BALL_RADIUS + SEPARATION
            } else {
                PLAY_AREA_BOTTOM - BALL_RADIUS - SEPARATION
            };
        }
        Collision::BotPaddle => {
            effects.play(SoundCue::PaddleHit);
            effects.burst(state.ball.center, BALL_SPARK, 12);
            let magnitude = velocity.length();
            let angle = bot_exit_angle(impact_fraction(state.ball.center.y, &state.bot));
            velocity = Vec2::new(magnitude * angle.cos(), magnitude * angle.sin());
            state.ball.center.x = state.bot.x - BALL_RADIUS - SEPARATION;
        }
        Collision::PlayerPaddle => {
            effects.play(SoundCue::PaddleHit);
            effects.burst(state.ball.center, BALL_SPARK, 12);
            let magnitude = velocity.length();
            let angle = player_exit_angle(impact_fraction(state.ball.center.y, &state.player));
            velocity = Vec2::new(magnitude * angle.cos(), magnitude * angle.sin());
            state.ball.center.x = state.player.x + state.player.width + BALL_RADIUS + SEPARATION;
        }
    }

    if matches!(
        state.ball.collision,
        Collision::PlayerPaddle | Collision::BotPaddle
    ) {
        increase_speed(&mut velocity, &mut state.speed);
    }

    state.prev_center = state.ball.center;
    state.ball.center += velocity;
    state.ball.collision
}

/// Where along the paddle height the ball made contact: 0 = top edge,
/// 1 = bottom edge, saturating outside.
fn impact_fraction(ball_y: f32, paddle: &Paddle) -> f32 {
    ((ball_y - paddle.y) / paddle.height).clamp(0.0, 1.0)
}

/// Exit angle off the player paddle, in radians. Sweeps -75 deg (top edge,
/// ball sent up) to 75 deg (bottom edge, ball sent down); y grows downward.
fn player_exit_angle(fraction: f32) -> f32 {
    (-75.0 + fraction * 150.0).to_radians()
}

/// Exit angle off the bot paddle: the mirrored sweep, 255 deg down to
/// 105 deg, sending the ball leftward.
fn bot_exit_angle(fraction: f32) -> f32 {
    (255.0 - fraction * 150.0).to_radians()
}

/// Diminishing-returns acceleration: the increment shrinks as the speed
/// grows, approximating logarithmic growth over many paddle hits.
fn increase_speed(velocity: &mut Vec2, current_speed: &mut f32) {
    let magnitude = velocity.length();
    let increase = 2.0 / *current_speed;
    *velocity += *velocity * (increase / magnitude);
    *current_speed += increase;
}

/// Uniform random serve direction within the 120-240 degree cone, scaled to
/// the base speed. Always has a leftward horizontal component.
fn serve_direction(rng: &mut impl Rng, speed: f32) -> Vec2 {
    let angle = (rng.gen_range(SERVE_CONE_MIN_DEG..=SERVE_CONE_MAX_DEG) as f32).to_radians();
    Vec2::new(speed * angle.cos(), speed * angle.sin())
}
