use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::io;
use std::time::Duration;

use crate::config::KeyBindings;

/// Discrete per-tick input signals consumed by the round loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    PaddleUp,
    PaddleDown,
    /// Enter: confirm on the game-over screen.
    Confirm,
    /// Esc: leave the round (menu while playing, quit from the over screen).
    Back,
    Quit,
}

/// Drain all pending key events and map them to actions. Polled once per
/// tick; terminal key-repeat supplies the "held" signal.
pub fn poll_game_input(bindings: &KeyBindings) -> io::Result<Vec<InputAction>> {
    let mut actions = Vec::new();

    while event::poll(Duration::from_millis(0))? {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key_matches(key.code, &bindings.paddle_up) {
                actions.push(InputAction::PaddleUp);
            } else if key_matches(key.code, &bindings.paddle_down) {
                actions.push(InputAction::PaddleDown);
            } else if key_matches(key.code, &bindings.quit) {
                actions.push(InputAction::Quit);
            } else if key.code == KeyCode::Enter {
                actions.push(InputAction::Confirm);
            } else if key.code == KeyCode::Esc {
                actions.push(InputAction::Back);
            }
        }
    }

    Ok(actions)
}

/// Match a crossterm key code against a config binding string ("Up",
/// "Down", "Enter", "Esc", or a single character, case-insensitive).
pub fn key_matches(code: KeyCode, binding: &str) -> bool {
    match code {
        KeyCode::Up => binding.eq_ignore_ascii_case("up"),
        KeyCode::Down => binding.eq_ignore_ascii_case("down"),
        KeyCode::Left => binding.eq_ignore_ascii_case("left"),
        KeyCode::Right => binding.eq_ignore_ascii_case("right"),
        KeyCode::Enter => binding.eq_ignore_ascii_case("enter"),
        KeyCode::Esc => binding.eq_ignore_ascii_case("esc"),
        KeyCode::Char(c) => {
            let mut chars = binding.chars();
            matches!((chars.next(), chars.next()), (Some(b), None) if b.eq_ignore_ascii_case(&c))
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bindings_match_case_insensitively() {
        assert!(key_matches(KeyCode::Char('q'), "Q"));
        assert!(key_matches(KeyCode::Char('Q'), "q"));
        assert!(key_matches(KeyCode::Up, "Up"));
        assert!(key_matches(KeyCode::Enter, "enter"));
        assert!(!key_matches(KeyCode::Char('w'), "Up"));
        assert!(!key_matches(KeyCode::Up, "Down"));
        assert!(!key_matches(KeyCode::Char('q'), "quit"));
    }
}
