// Main menu: difficulty selection and the app-level state machine.

pub mod input;
pub mod render;
pub mod state;

pub use input::{handle_menu_input, MenuAction};
pub use render::render_menu;
pub use state::{AppState, MenuItem, MenuState};
