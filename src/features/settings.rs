//! Application settings persistence
//!
//! Handles saving and loading user preferences.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::KeyBindings;

/// Application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Swipe gesture tuning
    pub swipe: SwipeSettings,
    /// Display and interface settings
    pub display: DisplaySettings,
    /// Custom keybindings
    pub keybindings: KeyBindings,
    /// Deck file to open when none is given on the command line
    pub deck_path: Option<PathBuf>,
}

/// Swipe gesture tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeSettings {
    /// Horizontal travel limit as a multiple of the window width
    pub width_factor: f32,
    /// Vertical travel limit in pixels (applies both ways)
    pub max_y: f32,
    /// Fraction of the horizontal limit a release must reach to fling
    pub fling_fraction: f32,
    /// Distance short of the horizontal limit at which the card is decided
    pub removal_margin: f32,
    /// Settle and fling animation length
    pub fling_duration_ms: u64,
    /// How long the card takes to catch up with the pointer
    pub drag_follow_ms: u64,
    /// Horizontal pixels per degree of tilt
    pub rotation_divisor: f32,
    /// Tilt limit in degrees
    pub max_rotation_deg: f32,
    /// Also return the vertical offset to zero while flinging
    pub settle_vertical_on_fling: bool,
}

/// Display-related settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Dark mode enabled
    pub dark_mode: bool,
    /// Finish settle and fling animations instantly
    pub reduce_motion: bool,
}

impl Default for SwipeSettings {
    fn default() -> Self {
        Self {
            width_factor: 3.2,
            max_y: 1000.0,
            fling_fraction: 0.25,
            removal_margin: 50.0,
            fling_duration_ms: 400,
            drag_follow_ms: 60,
            rotation_divisor: 60.0,
            max_rotation_deg: 40.0,
            settle_vertical_on_fling: false,
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            reduce_motion: false,
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "swipedeck", "SwipeDeck")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        Self::file_path()
            .and_then(|path| match Self::load_from_file(&path) {
                Ok(settings) => Some(settings),
                Err(e) => {
                    tracing::debug!("Using default settings ({}): {}", path.display(), e);
                    None
                }
            })
            .unwrap_or_default()
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(path) = Self::file_path() {
            self.save_to_file(&path)
        } else {
            Err(SettingsError::Io(
                "Could not determine config directory".to_string(),
            ))
        }
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_swipe_tuning() {
        let swipe = SwipeSettings::default();
        assert_eq!(swipe.width_factor, 3.2);
        assert_eq!(swipe.max_y, 1000.0);
        assert_eq!(swipe.fling_fraction, 0.25);
        assert_eq!(swipe.removal_margin, 50.0);
        assert_eq!(swipe.fling_duration_ms, 400);
        assert!(!swipe.settle_vertical_on_fling);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("nested").join("settings.json");

        let mut settings = Settings::default();
        settings.display.dark_mode = false;
        settings.swipe.fling_duration_ms = 250;
        settings.deck_path = Some(PathBuf::from("/tmp/deck.json"));

        settings.save_to_file(&path).expect("save should create directories");
        let loaded = Settings::load_from_file(&path).expect("failed to load settings");

        assert!(!loaded.display.dark_mode);
        assert_eq!(loaded.swipe.fling_duration_ms, 250);
        assert_eq!(loaded.deck_path, Some(PathBuf::from("/tmp/deck.json")));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "swipe": { "removal_margin": 80.0 } }"#)
            .expect("failed to write settings");

        let loaded = Settings::load_from_file(&path).expect("partial settings should parse");
        assert_eq!(loaded.swipe.removal_margin, 80.0);
        assert_eq!(loaded.swipe.fling_duration_ms, 400);
        assert!(loaded.display.dark_mode);
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not json").expect("failed to write settings");

        assert!(matches!(
            Settings::load_from_file(&path),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("absent.json");
        assert!(matches!(
            Settings::load_from_file(&path),
            Err(SettingsError::Io(_))
        ));
    }
}
