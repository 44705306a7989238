//! Player settings and preferences
//!
//! Persisted as JSON, separately from anything gameplay-related. A missing or
//! corrupt file just means default settings.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::consts::SMOOTHING_FACTOR;
use crate::sim::{ModeId, TrackingPolicy};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Controls ===
    /// How the catcher follows the pointer
    pub tracking: TrackingPolicy,
    /// Smoothed tracking responsiveness (0.0 - 1.0)
    pub smoothing_factor: f32,
    /// Mode highlighted on the menu at launch
    pub last_mode: ModeId,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Background music enabled
    pub music_on: bool,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Silence everything
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tracking: TrackingPolicy::Instant,
            smoothing_factor: SMOOTHING_FACTOR,
            last_mode: ModeId::Normal,

            master_volume: 0.8,
            sfx_volume: 1.0,
            music_on: false,
            music_volume: 0.6,
            muted: false,
        }
    }
}

impl Settings {
    /// Parse settings JSON, falling back to defaults
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Settings>(json) {
            Ok(settings) => settings.sanitized(),
            Err(e) => {
                log::warn!("Could not parse settings ({e}), using defaults");
                Self::default()
            }
        }
    }

    /// Load settings from disk
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => {
                log::info!("Loaded settings from {}", path.display());
                Self::from_json(&json)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("Could not read {} ({e}), using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Save settings to disk
    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Settings saved");
        Ok(())
    }

    /// Fold player preferences into an init-time config
    pub fn apply_to(&self, config: &mut GameConfig) {
        config.tracking = self.tracking;
        config.smoothing_factor = self.smoothing_factor;
        config.default_mode = self.last_mode;
    }

    /// Effective sound effect volume (respects mute)
    pub fn effective_sfx_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Effective music volume (respects mute)
    pub fn effective_music_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.music_volume
        }
    }

    /// Clamp hand-edited values back into range
    fn sanitized(mut self) -> Self {
        let unit = |v: f32, fallback: f32| if v.is_finite() { v.clamp(0.0, 1.0) } else { fallback };
        let defaults = Self::default();
        self.smoothing_factor = unit(self.smoothing_factor, defaults.smoothing_factor);
        self.master_volume = unit(self.master_volume, defaults.master_volume);
        self.sfx_volume = unit(self.sfx_volume, defaults.sfx_volume);
        self.music_volume = unit(self.music_volume, defaults.music_volume);
        self
    }
}
