//! Runner settings
//!
//! Loaded from a JSON file; any field left out keeps its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("strip_length must be at least 1")]
    EmptyStrip,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Number of addressable LEDs; also the level boundary
    pub strip_length: u32,
    /// Global brightness applied when showing the strip (0-255)
    pub brightness: u8,
    /// Simulated milliseconds between frames in the headless runner
    pub frame_interval_ms: u32,
    /// Milliseconds between controller samples
    pub sample_interval_ms: u32,
    /// Milliseconds between diagnostic log lines
    pub debug_interval_ms: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            strip_length: 146,
            brightness: 20,
            frame_interval_ms: 5,
            sample_interval_ms: 20,
            debug_interval_ms: 1000,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        if settings.strip_length == 0 {
            return Err(SettingsError::EmptyStrip);
        }
        Ok(settings)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings ({} lights)", settings.strip_length);
        Ok(settings)
    }
}
