use std::path::{Path, PathBuf};

use eframe::egui;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::render::CanvasSettings;
use crate::sim::{SimConfig, PARAM_MAX};

/// Environment variable that overrides the settings file location
const SETTINGS_ENV: &str = "FALLING_SHAPES_SETTINGS";

/// Errors that can occur while reading settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid setting: {0}")]
    Invalid(String),
}

/// Returns the path to the settings file: `~/.config/falling-shapes/settings.json`
fn settings_path() -> PathBuf {
    if let Some(path) = std::env::var_os(SETTINGS_ENV) {
        return PathBuf::from(path);
    }
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("falling-shapes");
    path.push("settings.json");
    path
}

/// Application settings.
///
/// Read from JSON in the platform config directory. Fields use
/// `#[serde(default)]` so a partial file only overrides what it names.
/// Nothing is ever written back.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub simulation: SimConfig,

    // Canvas background (stored as a u8 triple since Color32 isn't serde-friendly)
    pub background: [u8; 3],
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            simulation: SimConfig::default(),
            background: [255, 255, 255],
        }
    }
}

impl AppSettings {
    /// Load settings from disk, falling back to defaults on any error.
    pub fn load() -> Self {
        let path = settings_path();
        match Self::load_from(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(SettingsError::Io(e)) => {
                log::info!("No settings file found ({}), using defaults", e);
                Self::default()
            }
            Err(e) => {
                log::warn!("{} ({}), using defaults", e, path.display());
                Self::default()
            }
        }
    }

    /// Read and validate settings from a specific file
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse and validate settings JSON
    pub fn parse(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        let sim = &self.simulation;
        if !(sim.canvas_width > 0.0 && sim.canvas_height > 0.0) {
            return Err(SettingsError::Invalid(format!(
                "canvas size must be positive, got {}x{}",
                sim.canvas_width, sim.canvas_height
            )));
        }
        if !sim.cull_margin.is_finite() || !sim.spawn_height.is_finite() {
            return Err(SettingsError::Invalid(
                "cull_margin and spawn_height must be finite".to_string(),
            ));
        }
        if sim.initial_generation_rate > PARAM_MAX || sim.initial_gravity > PARAM_MAX {
            return Err(SettingsError::Invalid(format!(
                "initial rate and gravity must be at most {}",
                PARAM_MAX
            )));
        }
        Ok(())
    }

    /// Canvas display settings derived from these settings
    pub fn canvas_settings(&self) -> CanvasSettings {
        let [r, g, b] = self.background;
        CanvasSettings {
            size: egui::Vec2::new(self.simulation.canvas_width, self.simulation.canvas_height),
            background: egui::Color32::from_rgb(r, g, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(AppSettings::parse("{}").unwrap(), AppSettings::default());
    }

    #[test]
    fn test_partial_override() {
        let settings =
            AppSettings::parse(r#"{ "simulation": { "max_shapes": 10, "initial_gravity": 4 } }"#)
                .unwrap();
        assert_eq!(settings.simulation.max_shapes, 10);
        assert_eq!(settings.simulation.initial_gravity, 4);
        assert_eq!(settings.simulation.canvas_width, 800.0);
        assert_eq!(settings.simulation.cull_margin, 50.0);
        assert_eq!(settings.background, [255, 255, 255]);
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(
            AppSettings::parse("{ not json"),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            AppSettings::parse(r#"{ "simulation": { "canvas_width": 0 } }"#),
            Err(SettingsError::Invalid(_))
        ));
        assert!(matches!(
            AppSettings::parse(r#"{ "simulation": { "initial_generation_rate": 11 } }"#),
            Err(SettingsError::Invalid(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("falling-shapes-does-not-exist.json");
        assert!(matches!(
            AppSettings::load_from(&path),
            Err(SettingsError::Io(_))
        ));
    }

    #[test]
    fn test_canvas_settings() {
        let settings = AppSettings {
            background: [10, 20, 30],
            ..AppSettings::default()
        };
        let canvas = settings.canvas_settings();
        assert_eq!(canvas.size, egui::Vec2::new(800.0, 600.0));
        assert_eq!(canvas.background, egui::Color32::from_rgb(10, 20, 30));
    }
}
