// Configuration file loading and creation

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::types::Config;

/// Get the path to the configuration file
pub fn get_config_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("neon-pong");

    // Create config directory if it doesn't exist
    fs::create_dir_all(&path).ok();

    path.push("config.toml");
    path
}

/// Load configuration from file, or create default if it doesn't exist
pub fn load_config() -> Result<Config, io::Error> {
    let config_path = get_config_path();

    if config_path.exists() {
        let contents = fs::read_to_string(&config_path)?;
        match toml::from_str(&contents) {
            Ok(config) => Ok(config),
            Err(e) => {
                eprintln!("Warning: Failed to parse config file: {}", e);
                eprintln!("Using default configuration");
                Ok(Config::default())
            }
        }
    } else {
        create_default_config(&config_path)?;
        Ok(Config::default())
    }
}

/// Create a default configuration file with helpful comments
pub fn create_default_config(path: &Path) -> Result<(), io::Error> {
    let config = Config::default();
    let toml_string =
        toml::to_string_pretty(&config).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    let commented_toml = format!(
        "# Neon Pong Configuration File\n\
         # Edit this file to customize controls and colors\n\
         # After editing, restart the game for changes to take effect\n\
         #\n\
         # Key binding format: Use \"Up\", \"Down\", \"Enter\", \"Esc\"\n\
         #                     or single characters like \"W\", \"S\", \"Q\", etc.\n\
         #\n\
         # Colors: RGB values from 0-255\n\n\
         {}",
        toml_string
    );

    fs::write(path, commented_toml)?;
    println!("Created default config file at: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = Config::default();
        let toml_string = toml::to_string_pretty(&config).unwrap();

        let parsed: Config = toml::from_str(&toml_string).unwrap();

        assert_eq!(parsed.keybindings.paddle_up, config.keybindings.paddle_up);
        assert_eq!(parsed.keybindings.quit, config.keybindings.quit);
        assert_eq!(parsed.display.target_fps, config.display.target_fps);
        assert_eq!(parsed.display.ball_color, config.display.ball_color);
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let partial_toml = r#"
            [display]
            target_fps = 60
            background = [0, 0, 0]
            paddle_color = [255, 255, 255]
            ball_color = [255, 255, 255]
            ui_color = [200, 200, 200]
            accent_color = [255, 0, 255]
        "#;

        let config: Config = toml::from_str(partial_toml).unwrap();

        // Custom section applied
        assert_eq!(config.display.target_fps, 60);

        // Omitted section falls back to defaults
        assert_eq!(config.keybindings.paddle_up, "Up");
        assert_eq!(config.keybindings.menu_select, "Enter");
    }
}
