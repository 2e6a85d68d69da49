// Bot opponents: three difficulty tiers behind one policy trait.

mod perfect;
mod policy;
mod predictive;
mod reactive;

pub use perfect::PerfectBot;
pub use policy::{drive_paddle, BotPolicy};
pub use predictive::PredictiveBot;
pub use reactive::ReactiveBot;

/// Opponent difficulty, selected once per round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    /// Reactive bot - chases the ball's current position
    Easy,
    /// Predictive bot - aims for the straight-line wall intercept
    Medium,
    /// Perfect prediction - simulates wall bounces to the landing point
    Hard,
}

impl Difficulty {
    pub fn display_name(&self) -> &str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Hard => "HARD",
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Difficulty::Easy => "Reactive Bot",
            Difficulty::Medium => "Predictive Bot",
            Difficulty::Hard => "Perfect Prediction",
        }
    }
}

/// Create the policy instance for a difficulty.
pub fn create_policy(difficulty: Difficulty) -> Box<dyn BotPolicy> {
    match difficulty {
        Difficulty::Easy => Box::new(ReactiveBot),
        Difficulty::Medium => Box::new(PredictiveBot::new()),
        Difficulty::Hard => Box::new(PerfectBot::new()),
    }
}
