//! Catch Rush - A falling-object catch arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, catcher, collisions, game state)
//! - `game`: Frame-driven facade and outbound event interface
//! - `audio`: Sound effect routing and background music toggle
//! - `config`: Init-time field and gameplay configuration
//! - `settings`: Persisted player preferences

pub mod audio;
pub mod config;
pub mod game;
pub mod settings;
pub mod sim;

pub use config::{Field, GameConfig};
pub use game::{Game, GameListener, Snapshot};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Points awarded per caught object
    pub const SCORE_PER_CATCH: u32 = 10;
    /// Time spent on the game over screen before returning to the menu
    pub const GAME_OVER_DWELL_SECS: f32 = 1.2;

    /// Default play field (portrait canvas)
    pub const DEFAULT_FIELD_WIDTH: f32 = 420.0;
    pub const DEFAULT_FIELD_HEIGHT: f32 = 720.0;
    /// Catcher sits this far above the field bottom
    pub const CATCHER_BOTTOM_OFFSET: f32 = 80.0;

    /// Sprite scale factors
    pub const OBJECT_SPRITE_SCALE: f32 = 0.25;
    pub const CATCHER_SPRITE_SCALE: f32 = 0.35;
    /// Fraction of the scaled catcher sprite height that forms the catch band
    pub const CATCHER_BAND_RATIO: f32 = 0.55;

    /// Placeholder sizes used until sprites are measured
    pub const DEFAULT_OBJECT_SIZE: f32 = 40.0;
    pub const DEFAULT_CATCHER_WIDTH: f32 = 120.0;
    /// 40px placeholder sprite height scaled by 0.35
    pub const DEFAULT_CATCHER_HEIGHT: f32 = 14.0;

    /// Smoothed tracking: fraction of the remaining distance covered per frame
    pub const SMOOTHING_FACTOR: f32 = 0.25;

    /// Largest frame delta the core will consume (tab backgrounding etc.)
    pub const MAX_FRAME_DT: f32 = 1.0;
}

/// Make a host-supplied frame delta safe to integrate.
///
/// Negative and non-finite values become zero, and the result never exceeds
/// `max_dt`.
#[inline]
pub fn sanitize_dt(dt: f32, max_dt: f32) -> f32 {
    if !dt.is_finite() || dt <= 0.0 {
        return 0.0;
    }
    dt.min(max_dt.max(0.0))
}
