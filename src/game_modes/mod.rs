mod common;
mod vs_bot;

pub use vs_bot::{run_round, RoundOutcome};
