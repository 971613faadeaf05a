//! Demo Configuration
//!
//! Startup settings for the windowed demo plus JSON persistence for the sky
//! parameter store. A missing or unparsable config file is not fatal - the
//! demo logs a warning and runs with defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::atmosphere::{SkyParameters, SkyPreset};

/// Errors from the persistence layer.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Startup configuration for the demo window and day cycle.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Window width in physical pixels
    pub width: u32,
    /// Window height in physical pixels
    pub height: u32,
    /// VSync on/off
    pub vsync: bool,
    /// Preset applied at startup
    pub preset: SkyPreset,
    /// Day-cycle speed in sky hours per real second
    pub rotation_speed: f32,
    /// Start with the cycle frozen
    pub paused: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            vsync: true,
            preset: SkyPreset::Noon,
            rotation_speed: crate::atmosphere::day_cycle::DEFAULT_ROTATION_SPEED,
            paused: false,
        }
    }
}

impl DemoConfig {
    /// Load from a JSON file, falling back to defaults (with a logged
    /// warning) if the file is missing or malformed.
    pub fn load_or_default(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(config) => config,
                Err(err) => {
                    log::warn!("[Config] {} is malformed ({}), using defaults", path.display(), err);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("[Config] {} not found, using defaults", path.display());
                Self::default()
            }
        }
    }
}

/// Save the parameter store to a JSON file.
pub fn save_params(params: &SkyParameters, path: &Path) -> Result<(), ConfigError> {
    let json = serde_json::to_string_pretty(params)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Load a parameter store from a JSON file.
pub fn load_params(path: &Path) -> Result<SkyParameters, ConfigError> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}
