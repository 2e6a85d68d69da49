// Configuration: controls and display settings loaded from a TOML file.

pub mod loader;
pub mod types;

pub use loader::{create_default_config, get_config_path, load_config};
pub use types::{Config, DisplayConfig, KeyBindings};
