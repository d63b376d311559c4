//! Collision tuning settings
//!
//! Loaded from a JSON file alongside the game's other data. Missing fields
//! fall back to defaults; a missing file falls back to `Settings::default()`.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::SHORTEN_FACTOR;

/// How strictly a fast mover is checked against boxes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum HistoryMode {
    /// Current frame only
    Current,
    /// Current frame, then last frame if that missed
    #[default]
    CurrentOrPrevious,
}

impl HistoryMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryMode::Current => "current",
            HistoryMode::CurrentOrPrevious => "current_or_previous",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "current" => Some(HistoryMode::Current),
            "current_or_previous" | "previous" => Some(HistoryMode::CurrentOrPrevious),
            _ => None,
        }
    }
}

/// Errors from loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Shortening factor must lie in (0, 1]
    #[error("shorten_factor {0} out of range (0, 1]")]
    ShortenFactor(f64),
}

/// Collision tuning knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Scale applied to segments before crossing tests (1.0 = no shortening)
    pub shorten_factor: f64,
    /// Frame history used when scoring ring landings against boxes
    pub history: HistoryMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            shorten_factor: SHORTEN_FACTOR,
            history: HistoryMode::CurrentOrPrevious,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from `path`, falling back to defaults if it does not exist
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => {
                let settings = Self::from_json(&json)?;
                log::info!("Loaded settings from {}", path.display());
                Ok(settings)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        // Written as a negated range check so NaN is rejected too
        if !(self.shorten_factor > 0.0 && self.shorten_factor <= 1.0) {
            return Err(SettingsError::ShortenFactor(self.shorten_factor));
        }
        Ok(())
    }

    /// Whether box hits should also be tried against last frame
    pub fn check_previous_frame(&self) -> bool {
        self.history == HistoryMode::CurrentOrPrevious
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.shorten_factor, 0.99);
        assert!(settings.check_previous_frame());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{"history":"current"}"#).unwrap();
        assert_eq!(settings.history, HistoryMode::Current);
        assert_eq!(settings.shorten_factor, SHORTEN_FACTOR);
        assert!(!settings.check_previous_frame());
    }

    #[test]
    fn test_rejects_bad_factor() {
        assert!(matches!(
            Settings::from_json(r#"{"shorten_factor":0.0}"#),
            Err(SettingsError::ShortenFactor(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{"shorten_factor":1.5}"#),
            Err(SettingsError::ShortenFactor(_))
        ));
        assert!(matches!(
            Settings::from_json("not json"),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            shorten_factor: 0.95,
            history: HistoryMode::Current,
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("tangle-geom-settings-does-not-exist.json");
        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_history_mode_names() {
        for mode in [HistoryMode::Current, HistoryMode::CurrentOrPrevious] {
            assert_eq!(HistoryMode::from_str(mode.as_str()), Some(mode));
        }
        assert_eq!(HistoryMode::from_str("PREVIOUS"), Some(HistoryMode::CurrentOrPrevious));
        assert_eq!(HistoryMode::from_str("sideways"), None);
    }
}
