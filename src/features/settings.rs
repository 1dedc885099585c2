//! Application settings persistence
//!
//! Handles saving and loading user preferences. The selected rating is
//! never stored here.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Display and interface settings
    #[serde(default)]
    pub display: DisplaySettings,
    /// Selection feedback settings
    #[serde(default)]
    pub feedback: FeedbackSettings,
}

/// Display and interface settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Use the dark palette
    pub dark_mode: bool,
    /// UI language code ("en" or "zh")
    pub language: String,
    /// Power saving mode - disables the decorative button pulse
    #[serde(default)]
    pub power_saving_mode: bool,
}

/// Selection feedback settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackSettings {
    /// Play a click tone when the rating changes
    pub sound_enabled: bool,
    /// Click volume (0.0 to 1.0)
    #[serde(default = "default_feedback_volume")]
    pub volume: f32,
}

fn default_feedback_volume() -> f32 {
    0.3
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            language: "en".to_string(),
            power_saving_mode: false,
        }
    }
}

impl Default for FeedbackSettings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            volume: default_feedback_volume(),
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "ratestars", "RateStars")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            tracing::warn!("Could not determine config directory, using default settings");
            return Self::default();
        };

        Self::load_or_init(&path)
    }

    /// Load settings from `path`, writing defaults there on first run
    ///
    /// An unreadable or malformed file is left untouched and defaults are
    /// used for this session.
    pub fn load_or_init(path: &Path) -> Self {
        if !path.exists() {
            let settings = Self::default();
            match settings.save_to_file(path) {
                Ok(()) => tracing::info!("Wrote default settings to {}", path.display()),
                Err(e) => tracing::warn!("Failed to write default settings: {}", e),
            }
            return settings;
        }

        match Self::load_from_file(path) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                tracing::warn!("Using default settings ({})", e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
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

    fn temp_settings_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("ratestars-test-{}-{}", name, std::process::id()))
            .join("settings.json")
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = temp_settings_path("missing");
        let result = Settings::load_from_file(&path);
        assert!(matches!(result, Err(SettingsError::Io(_))));
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let path = temp_settings_path("malformed");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{ not json").unwrap();

        let result = Settings::load_from_file(&path);
        assert!(matches!(result, Err(SettingsError::Parse(_))));

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn saved_values_are_loaded_back() {
        let path = temp_settings_path("saved");
        let mut settings = Settings::default();
        settings.display.dark_mode = true;
        settings.display.language = "zh".to_string();
        settings.feedback.sound_enabled = false;

        settings.save_to_file(&path).unwrap();
        let loaded = Settings::load_from_file(&path).unwrap();
        assert_eq!(loaded, settings);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn first_run_writes_defaults() {
        let path = temp_settings_path("first-run");
        let _ = std::fs::remove_dir_all(path.parent().unwrap());

        let settings = Settings::load_or_init(&path);
        assert_eq!(settings, Settings::default());
        assert!(path.exists());
        assert_eq!(Settings::load_from_file(&path).unwrap(), Settings::default());

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn malformed_file_is_not_overwritten() {
        let path = temp_settings_path("keep-malformed");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{ not json").unwrap();

        let settings = Settings::load_or_init(&path);
        assert_eq!(settings, Settings::default());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn existing_file_is_loaded_by_init() {
        let path = temp_settings_path("existing");
        let mut saved = Settings::default();
        saved.display.power_saving_mode = true;
        saved.save_to_file(&path).unwrap();

        assert_eq!(Settings::load_or_init(&path), saved);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let path = temp_settings_path("partial");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(
            &path,
            r#"{ "display": { "dark_mode": true, "language": "en" } }"#,
        )
        .unwrap();

        let loaded = Settings::load_from_file(&path).unwrap();
        assert!(loaded.display.dark_mode);
        assert!(!loaded.display.power_saving_mode);
        assert_eq!(loaded.feedback, FeedbackSettings::default());

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }
}
