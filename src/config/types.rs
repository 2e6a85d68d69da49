// User-tunable settings with defaults matching the built-in look and
// controls. Simulation geometry and speeds are deliberately NOT here;
// they are fixed constants in `game::field`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct KeyBindings {
    pub paddle_up: String,
    pub paddle_down: String,
    pub quit: String,

    pub menu_up: String,
    pub menu_down: String,
    pub menu_select: String,
    pub menu_back: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            paddle_up: "Up".to_string(),
            paddle_down: "Down".to_string(),
            quit: "Q".to_string(),
            menu_up: "Up".to_string(),
            menu_down: "Down".to_string(),
            menu_select: "Enter".to_string(),
            menu_back: "Esc".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    // Target frames per second
    pub target_fps: u64,

    // Colors as RGB values 0-255
    pub background: [u8; 3],
    pub paddle_color: [u8; 3],
    pub ball_color: [u8; 3],
    pub ui_color: [u8; 3],
    pub accent_color: [u8; 3],
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            target_fps: 120,
            background: [10, 10, 30],
            paddle_color: [0, 255, 200],
            ball_color: [255, 50, 150],
            ui_color: [100, 200, 255],
            accent_color: [255, 100, 255],
        }
    }
}
