// Collision classification for the ball against borders and paddles.

use glam::Vec2;

use super::field::{BALL_RADIUS, PLAY_AREA_BOTTOM, PLAY_AREA_TOP, SCREEN_WIDTH};
use super::state::Paddle;

/// Result of classifying the ball's position for one tick.
///
/// Checks run in a fixed priority order (left, right, upper, lower border,
/// then paddles), so a ball that is past a border while touching a paddle
/// is a border event: scoring wins the tie-break over a bounce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    None,
    UpperWall,
    LowerWall,
    LeftWall,
    RightWall,
    PlayerPaddle,
    BotPaddle,
}

/// Classify against the playfield borders only.
///
/// Used for interior trajectory stepping, where the far paddle must be
/// ignored.
pub fn classify_walls(center: Vec2) -> Collision {
    if center.x < BALL_RADIUS {
        return Collision::LeftWall;
    }
    if center.x > SCREEN_WIDTH - BALL_RADIUS {
        return Collision::RightWall;
    }
    if center.y < PLAY_AREA_TOP + BALL_RADIUS {
        return Collision::UpperWall;
    }
    if center.y > PLAY_AREA_BOTTOM - BALL_RADIUS {
        return Collision::LowerWall;
    }
    Collision::None
}

/// Classify against borders and both paddles. Authoritative per-tick check.
pub fn classify(center: Vec2, player: &Paddle, bot: &Paddle) -> Collision {
    let walls = classify_walls(center);
    if walls != Collision::None {
        return walls;
    }
    if circle_overlaps_rect(center, BALL_RADIUS, player) {
        return Collision::PlayerPaddle;
    }
    if circle_overlaps_rect(center, BALL_RADIUS, bot) {
        return Collision::BotPaddle;
    }
    Collision::None
}

fn circle_overlaps_rect(center: Vec2, radius: f32, rect: &Paddle) -> bool {
    let nearest = Vec2::new(
        center.x.clamp(rect.x, rect.x + rect.width),
        center.y.clamp(rect.y, rect.y + rect.height),
    );
    center.distance_squared(nearest) <= radius * radius
}
