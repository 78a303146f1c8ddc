use std::path::Path;

use crate::error::ConfigError;
use crate::game::Markers;

/// Characters used by the console board rendering.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub empty_marker: char,
    pub player_one_marker: char,
    pub player_two_marker: char,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        let markers = Markers::default();
        DisplayConfig {
            empty_marker: markers.empty,
            player_one_marker: markers.player_one,
            player_two_marker: markers.player_two,
        }
    }
}

impl DisplayConfig {
    pub fn markers(&self) -> Markers {
        Markers {
            empty: self.empty_marker,
            player_one: self.player_one_marker,
            player_two: self.player_two_marker,
        }
    }
}

/// Console shell behaviour.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Token that starts a new game.
    pub start_key: String,
    /// Clamp column input into 1..=7 instead of rejecting it.
    pub clamp_columns: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig {
            start_key: "p".to_string(),
            clamp_columns: true,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub display: DisplayConfig,
    pub shell: ShellConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::info!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let d = &self.display;
        for (name, marker) in [
            ("display.empty_marker", d.empty_marker),
            ("display.player_one_marker", d.player_one_marker),
            ("display.player_two_marker", d.player_two_marker),
        ] {
            if marker.is_whitespace() || marker.is_control() {
                return Err(ConfigError::Validation(format!(
                    "{name} must be a visible character"
                )));
            }
        }
        if d.empty_marker == d.player_one_marker
            || d.empty_marker == d.player_two_marker
            || d.player_one_marker == d.player_two_marker
        {
            return Err(ConfigError::Validation(
                "display markers must be distinct".into(),
            ));
        }

        let key = &self.shell.start_key;
        if key.is_empty() || key.chars().any(char::is_whitespace) {
            return Err(ConfigError::Validation(
                "shell.start_key must be a non-empty word".into(),
            ));
        }
        if key.parse::<i64>().is_ok() {
            return Err(ConfigError::Validation(
                "shell.start_key must not be a number".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}
