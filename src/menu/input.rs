// Menu input handling: keyboard navigation plus mouse hover and click.

use crossterm::event::{self, Event, KeyCode, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use std::io;
use std::time::Duration;

use crate::ai::Difficulty;
use crate::config::KeyBindings;
use crate::game::input::key_matches;

use super::state::{MenuItem, MenuState};

/// Menu action result
pub enum MenuAction {
    /// Continue in menu
    None,
    /// Start a round at the chosen difficulty
    StartGame(Difficulty),
    /// Exit application
    Quit,
}

/// Handle one pending input event, if any, and return the next action.
pub fn handle_menu_input(
    menu_state: &mut MenuState,
    bindings: &KeyBindings,
) -> Result<MenuAction, io::Error> {
    if event::poll(Duration::from_millis(100))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                return Ok(handle_key_press(menu_state, bindings, key.code));
            }
            Event::Mouse(mouse) => {
                return Ok(handle_mouse(menu_state, mouse));
            }
            _ => {}
        }
    }

    Ok(MenuAction::None)
}

fn handle_key_press(
    menu_state: &mut MenuState,
    bindings: &KeyBindings,
    key_code: KeyCode,
) -> MenuAction {
    if key_matches(key_code, &bindings.menu_up) {
        menu_state.select_previous();
        MenuAction::None
    } else if key_matches(key_code, &bindings.menu_down) {
        menu_state.select_next();
        MenuAction::None
    } else if key_matches(key_code, &bindings.menu_select) || key_code == KeyCode::Char(' ') {
        activate(menu_state.selected_item())
    } else if key_matches(key_code, &bindings.menu_back) || key_matches(key_code, &bindings.quit) {
        MenuAction::Quit
    } else {
        MenuAction::None
    }
}

fn handle_mouse(menu_state: &mut MenuState, mouse: MouseEvent) -> MenuAction {
    match mouse.kind {
        MouseEventKind::Moved => {
            menu_state.hovered_index = menu_state.item_at(mouse.column, mouse.row);
            MenuAction::None
        }
        MouseEventKind::Down(MouseButton::Left) => {
            match menu_state.item_at(mouse.column, mouse.row) {
                Some(index) => {
                    menu_state.selected_index = index;
                    activate(menu_state.items[index])
                }
                None => MenuAction::None,
            }
        }
        _ => MenuAction::None,
    }
}

fn activate(item: MenuItem) -> MenuAction {
    match item.difficulty() {
        Some(difficulty) => MenuAction::StartGame(difficulty),
        None => MenuAction::Quit,
    }
}
