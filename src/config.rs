//! Init-time game configuration
//!
//! Field dimensions are fixed for the lifetime of a [`crate::Game`]; everything
//! else here only seeds the initial state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{ModeId, TrackingPolicy};

/// The fixed-size play area
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    width: f32,
    height: f32,
}

impl Default for Field {
    fn default() -> Self {
        Self {
            width: DEFAULT_FIELD_WIDTH,
            height: DEFAULT_FIELD_HEIGHT,
        }
    }
}

impl Field {
    /// Create a field; non-positive or non-finite dimensions fall back to defaults
    pub fn new(width: f32, height: f32) -> Self {
        let width = if width.is_finite() && width > 0.0 {
            width
        } else {
            log::warn!("Invalid field width {width}, using {DEFAULT_FIELD_WIDTH}");
            DEFAULT_FIELD_WIDTH
        };
        let height = if height.is_finite() && height > 0.0 {
            height
        } else {
            log::warn!("Invalid field height {height}, using {DEFAULT_FIELD_HEIGHT}");
            DEFAULT_FIELD_HEIGHT
        };
        Self { width, height }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn center_x(&self) -> f32 {
        self.width / 2.0
    }

    /// Clamp a horizontal center so an entity of `width` stays inside the field
    pub fn clamp_x(&self, x: f32, width: f32) -> f32 {
        let half = width / 2.0;
        let lo = half;
        let hi = self.width - half;
        if lo > hi {
            // Entity wider than the field: pin it to the middle
            return self.center_x();
        }
        x.clamp(lo, hi)
    }
}

/// Game configuration, loadable from JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub field_width: f32,
    pub field_height: f32,
    /// Distance from the field bottom to the catcher's top edge line
    pub catcher_offset: f32,
    /// Initial catcher size (replaced once the sprite is measured)
    pub catcher_size: Vec2,
    /// Initial falling object size
    pub object_size: Vec2,
    pub tracking: TrackingPolicy,
    pub smoothing_factor: f32,
    pub max_frame_dt: f32,
    pub seed: u64,
    pub default_mode: ModeId,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: DEFAULT_FIELD_WIDTH,
            field_height: DEFAULT_FIELD_HEIGHT,
            catcher_offset: CATCHER_BOTTOM_OFFSET,
            catcher_size: Vec2::new(DEFAULT_CATCHER_WIDTH, DEFAULT_CATCHER_HEIGHT),
            object_size: Vec2::splat(DEFAULT_OBJECT_SIZE),
            tracking: TrackingPolicy::Instant,
            smoothing_factor: SMOOTHING_FACTOR,
            max_frame_dt: MAX_FRAME_DT,
            seed: 0x5eed,
            default_mode: ModeId::Normal,
        }
    }
}

impl GameConfig {
    /// Parse a JSON config, falling back to defaults if it is malformed
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Invalid game config ({e}), using defaults");
                Self::default()
            }
        }
    }

    pub fn field(&self) -> Field {
        Field::new(self.field_width, self.field_height)
    }

    /// Catcher baseline y. Always strictly above the miss line so the catch
    /// band and the miss check can never both hold.
    pub fn catcher_y(&self) -> f32 {
        let field = self.field();
        let offset = if self.catcher_offset.is_finite() {
            self.catcher_offset.max(1.0)
        } else {
            CATCHER_BOTTOM_OFFSET
        };
        (field.height() - offset).max(0.0)
    }

    /// Longest frame the simulation will honor. A cap that is not a positive
    /// finite number would freeze every frame, so it falls back to the default.
    pub fn frame_dt_cap(&self) -> f32 {
        if self.max_frame_dt.is_finite() && self.max_frame_dt > 0.0 {
            self.max_frame_dt
        } else {
            log::warn!(
                "Invalid max_frame_dt {}, using {MAX_FRAME_DT}",
                self.max_frame_dt
            );
            MAX_FRAME_DT
        }
    }

    pub fn tracking_mode(&self) -> crate::sim::Tracking {
        crate::sim::Tracking::new(self.tracking, self.smoothing_factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_clamp() {
        let field = Field::new(400.0, 600.0);
        assert_eq!(field.clamp_x(-1000.0, 100.0), 50.0);
        assert_eq!(field.clamp_x(1000.0, 100.0), 350.0);
        assert_eq!(field.clamp_x(200.0, 100.0), 200.0);
        // Wider than the field
        assert_eq!(field.clamp_x(10.0, 500.0), 200.0);
    }

    #[test]
    fn test_field_rejects_bad_dimensions() {
        let field = Field::new(f32::NAN, -3.0);
        assert_eq!(field.width(), DEFAULT_FIELD_WIDTH);
        assert_eq!(field.height(), DEFAULT_FIELD_HEIGHT);
    }

    #[test]
    fn test_config_partial_json() {
        let config = GameConfig::from_json(r#"{ "field_width": 300.0, "tracking": "Smoothed" }"#);
        assert_eq!(config.field_width, 300.0);
        assert_eq!(config.field_height, DEFAULT_FIELD_HEIGHT);
        assert_eq!(config.tracking, TrackingPolicy::Smoothed);
    }

    #[test]
    fn test_config_bad_json_uses_defaults() {
        let config = GameConfig::from_json("not json");
        assert_eq!(config.field_width, DEFAULT_FIELD_WIDTH);
        assert_eq!(config.default_mode, ModeId::Normal);
    }

    #[test]
    fn test_bad_frame_cap_does_not_freeze_play() {
        let config = GameConfig::from_json(r#"{ "max_frame_dt": -0.5 }"#);
        assert_eq!(config.frame_dt_cap(), MAX_FRAME_DT);
        let zero = GameConfig {
            max_frame_dt: 0.0,
            ..Default::default()
        };
        assert_eq!(zero.frame_dt_cap(), MAX_FRAME_DT);

        let mut game = crate::Game::headless(&config);
        assert!(game.start("easy"));
        let mut seen_objects = false;
        for _ in 0..600 {
            game.on_frame(1.0 / 60.0);
            seen_objects |= !game.session().objects.is_empty();
        }
        assert!(seen_objects);
    }

    #[test]
    fn test_catcher_band_above_miss_line() {
        let config = GameConfig {
            catcher_offset: -50.0,
            ..Default::default()
        };
        assert!(config.catcher_y() < config.field().height());
    }
}
