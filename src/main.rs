mod ai;
mod config;
mod debug;
mod effects;
mod game;
mod game_modes;
mod menu;
mod ui;

use std::io;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::debug;

use config::Config;
use game_modes::RoundOutcome;
use menu::{AppState, MenuAction, MenuState};

fn main() -> Result<()> {
    let debug_enabled = std::env::args().any(|arg| arg == "--debug");
    debug::init(debug_enabled)?;

    let config = config::load_config()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

/// Drive the app state machine: menu, rounds, exit.
fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: &Config,
) -> Result<()> {
    let mut app_state = AppState::Menu;
    let mut menu_state = MenuState::new();

    loop {
        match app_state {
            AppState::Menu => {
                terminal.draw(|frame| {
                    menu::render_menu(frame, &mut menu_state, &config.display)
                })?;
                match menu::handle_menu_input(&mut menu_state, &config.keybindings)? {
                    MenuAction::None => {}
                    MenuAction::StartGame(difficulty) => {
                        debug!(?difficulty, "difficulty selected");
                        app_state = AppState::Game(difficulty);
                    }
                    MenuAction::Quit => app_state = AppState::Exiting,
                }
            }
            AppState::Game(difficulty) => {
                app_state = match game_modes::run_round(terminal, config, difficulty)? {
                    RoundOutcome::BackToMenu => {
                        menu_state = MenuState::new();
                        AppState::Menu
                    }
                    RoundOutcome::Quit => AppState::Exiting,
                };
            }
            AppState::Exiting => {
                debug!("exiting");
                return Ok(());
            }
        }
    }
}
