use std::time::{Duration, Instant};

use anyhow::Result;
use rand::thread_rng;
use ratatui::Terminal;
use tracing::debug;

use crate::ai::{self, drive_paddle, Difficulty};
use crate::config::Config;
use crate::effects::Effects;
use crate::game::field::PLAYER_PADDLE_STEP;
use crate::game::{motion, poll_game_input, InputAction, RoundPhase, RoundState, Side};
use crate::ui::{self, Overlay};

use super::common::limit_frame_rate;

/// How a finished round hands control back to the app loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    BackToMenu,
    Quit,
}

/// Run one round against the bot at the given difficulty.
///
/// Tick order is fixed: input, score resolution, ball motion, bot movement,
/// effects, render. Returns when the player leaves the round or quits.
pub fn run_round<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: &Config,
    difficulty: Difficulty,
) -> Result<RoundOutcome> {
    let mut policy = ai::create_policy(difficulty);
    debug!(bot = policy.name(), "round start");

    let mut state = RoundState::new();
    let mut effects = Effects::new();
    let mut rng = thread_rng();

    let target_fps = config.display.target_fps.max(1);
    let frame_duration = Duration::from_millis(1000 / target_fps);
    let dt = 1.0 / target_fps as f32;

    loop {
        let frame_start = Instant::now();

        for action in poll_game_input(&config.keybindings)? {
            match (state.phase, action) {
                (_, InputAction::Quit) => return Ok(RoundOutcome::Quit),
                (RoundPhase::Playing, InputAction::Back) => {
                    return Ok(RoundOutcome::BackToMenu);
                }
                (RoundPhase::Playing, InputAction::PaddleUp) => {
                    state.player.move_up(PLAYER_PADDLE_STEP);
                }
                (RoundPhase::Playing, InputAction::PaddleDown) => {
                    state.player.move_down(PLAYER_PADDLE_STEP);
                }
                (RoundPhase::Over, InputAction::Confirm) => {
                    return Ok(RoundOutcome::BackToMenu);
                }
                (RoundPhase::Over, InputAction::Back) => return Ok(RoundOutcome::Quit),
                _ => {}
            }
        }

        if state.phase == RoundPhase::Playing {
            // Border exits score before the motion step runs, so a ball
            // past a border can never bounce off a paddle instead.
            if state.resolve_score(&mut effects).is_some() {
                policy.reset();
            }
            if state.phase == RoundPhase::Playing {
                motion::step(&mut state, &mut effects, &mut rng);
                let target = policy.target_y(&state.ball, state.prev_center);
                drive_paddle(&mut state.bot, target, policy.paddle_step());
            }
        }

        effects.update(dt);
        for cue in effects.drain_sounds() {
            // Audio playback lives outside the core; surface the cues in
            // the session log.
            debug!(?cue, "sound cue");
        }

        let overlay = game_over_overlay(&state, config);
        terminal.draw(|frame| {
            let area = frame.area();
            ui::render(frame, &state, &effects, &config.display);
            if let Some(ref overlay) = overlay {
                ui::render_overlay(frame, overlay, area);
            }
        })?;

        limit_frame_rate(frame_start, frame_duration);
    }
}

fn game_over_overlay(state: &RoundState, config: &Config) -> Option<Overlay> {
    if state.phase != RoundPhase::Over {
        return None;
    }
    let (headline, accent) = match state.winner() {
        Some(Side::Player) => ("YOU WIN!", config.display.paddle_color),
        _ => ("YOU LOSE!", config.display.ball_color),
    };
    Some(
        Overlay::new(vec![
            headline.to_string(),
            String::new(),
            format!(
                "Final Score: {} - {}",
                state.player_score, state.bot_score
            ),
            String::new(),
            "Press ENTER to return to menu".to_string(),
            "Press ESC to quit".to_string(),
        ])
        .with_title("GAME OVER")
        .with_accent(ui::render::rgb(accent)),
    )
}
