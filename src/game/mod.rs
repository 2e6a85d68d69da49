pub mod collision;
pub mod field;
pub mod input;
pub mod motion;
pub mod prediction;
pub mod state;

pub use collision::Collision;
pub use input::{poll_game_input, InputAction};
pub use state::{Ball, Paddle, RoundPhase, RoundState, Side};
