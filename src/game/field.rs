// Playfield geometry and tuning constants.
//
// Everything runs in a fixed 1600x900 virtual coordinate system with y
// growing downward; the renderer scales this to the terminal size.

pub const SCREEN_WIDTH: f32 = 1600.0;
pub const SCREEN_HEIGHT: f32 = 900.0;

// Decorative border strips at the top and bottom; the ball bounces off
// their inner edges.
pub const BORDER_THICKNESS: f32 = 40.0;
pub const PLAY_AREA_TOP: f32 = BORDER_THICKNESS;
pub const PLAY_AREA_BOTTOM: f32 = SCREEN_HEIGHT - BORDER_THICKNESS;

pub const PADDLE_WIDTH: f32 = 20.0;
pub const PADDLE_HEIGHT: f32 = 200.0;

/// Player paddle sits just inside the left edge, bot just inside the right.
pub const PLAYER_PADDLE_X: f32 = 10.0;
pub const BOT_PADDLE_X: f32 = SCREEN_WIDTH - 30.0;

pub const BALL_RADIUS: f32 = 20.0;

/// Base ball speed in virtual units per tick, restored after every point.
pub const BALL_SPEED: f32 = 4.0;

/// Player paddle movement per up/down input.
pub const PLAYER_PADDLE_STEP: f32 = 7.0;

/// First side to reach this many points wins the round.
pub const WIN_SCORE: u32 = 10;
