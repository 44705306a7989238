//! Game state and core simulation types
//!
//! The whole mutable game lives in one [`Session`] that is handed to each
//! subsystem in turn; nothing is stored in globals.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::mode::{Mode, ModeId};
use crate::config::{Field, GameConfig};
use crate::consts::*;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Start screen, waiting for the player to pick a mode and press play
    Menu,
    /// Active gameplay
    Playing,
    /// Run ended, waiting out the dwell before returning to the menu
    GameOver,
}

/// Things that happened during a tick, consumed by audio/UI collaborators
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum GameEvent {
    Started { mode: ModeId },
    ModeSelected { mode: ModeId },
    Spawned { id: u32 },
    Caught { id: u32, score: u32 },
    Missed { id: u32, lives: u32 },
    /// Last life lost; the state machine turns this into `GameOver`
    LifeDepleted,
    GameOver { score: u32 },
    ReturnedToMenu,
}

/// A falling object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallingObject {
    pub id: u32,
    /// Center position
    pub pos: Vec2,
    pub size: Vec2,
    /// Downward speed in px/s
    pub fall_speed: f32,
}

impl FallingObject {
    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }
}

/// How the catcher follows its input target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TrackingPolicy {
    /// Snap to the target every frame
    #[default]
    Instant,
    /// Close a fixed fraction of the gap every frame
    Smoothed,
}

/// Tracking policy plus its tuning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tracking {
    pub policy: TrackingPolicy,
    pub smoothing_factor: f32,
}

impl Default for Tracking {
    fn default() -> Self {
        Self::new(TrackingPolicy::Instant, SMOOTHING_FACTOR)
    }
}

impl Tracking {
    pub fn new(policy: TrackingPolicy, smoothing_factor: f32) -> Self {
        let smoothing_factor = if smoothing_factor.is_finite() {
            smoothing_factor.clamp(0.0, 1.0)
        } else {
            SMOOTHING_FACTOR
        };
        Self {
            policy,
            smoothing_factor,
        }
    }
}

/// Catcher collision size for a sprite of the given natural dimensions
pub fn catcher_size_from_sprite(natural_width: f32, natural_height: f32) -> Vec2 {
    Vec2::new(
        natural_width * CATCHER_SPRITE_SCALE,
        natural_height * CATCHER_SPRITE_SCALE * CATCHER_BAND_RATIO,
    )
}

/// Falling object size for a sprite of the given natural dimensions
pub fn object_size_from_sprite(natural_width: f32, natural_height: f32) -> Vec2 {
    Vec2::new(natural_width, natural_height) * OBJECT_SPRITE_SCALE
}

/// The player's catcher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catcher {
    /// Horizontal center used for rendering and collision
    pub x: f32,
    /// Baseline; the catch band spans `y - height .. y`
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Latest input-derived position
    pub target_x: f32,
}

impl Catcher {
    pub fn new(field: &Field, y: f32, size: Vec2) -> Self {
        Self {
            x: field.center_x(),
            y,
            width: size.x,
            height: size.y,
            target_x: field.center_x(),
        }
    }

    pub fn left(&self) -> f32 {
        self.x - self.width / 2.0
    }

    pub fn right(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Center both position and target on the field
    pub fn recenter(&mut self, field: &Field) {
        self.x = field.center_x();
        self.target_x = field.center_x();
    }
}

/// Complete game state for one process lifetime
#[derive(Debug, Clone)]
pub struct Session {
    pub field: Field,
    /// Mode captured at `start`, drives the current round
    pub mode: Mode,
    /// Mode picked on the menu, used by the next `start`
    pub selected_mode: ModeId,
    pub score: u32,
    pub lives: u32,
    pub phase: GamePhase,
    pub catcher: Catcher,
    pub tracking: Tracking,
    /// Active objects in spawn order
    pub objects: Vec<FallingObject>,
    /// Size given to newly spawned objects
    pub object_size: Vec2,
    pub spawn_accumulator: f32,
    pub dwell_accumulator: f32,
    pub max_frame_dt: f32,
    pub seed: u64,
    pub rng: Pcg32,
    /// Events emitted since the last drain; each tick starts with a fresh list
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl Session {
    /// Create a session sitting on the menu with the configured default mode
    pub fn new(config: &GameConfig) -> Self {
        let field = config.field();
        let mode = config.default_mode.mode();
        Self {
            field,
            mode,
            selected_mode: mode.id,
            score: 0,
            lives: mode.starting_lives,
            phase: GamePhase::Menu,
            catcher: Catcher::new(
                &field,
                config.catcher_y(),
                sanitize_size(config.catcher_size, DEFAULT_CATCHER_SIZE),
            ),
            tracking: config.tracking_mode(),
            objects: Vec::new(),
            object_size: sanitize_size(config.object_size, DEFAULT_OBJECT_DIMS),
            spawn_accumulator: 0.0,
            dwell_accumulator: 0.0,
            max_frame_dt: config.frame_dt_cap(),
            seed: config.seed,
            rng: Pcg32::seed_from_u64(config.seed),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Replace the catcher's collision size and keep it inside the field
    pub fn set_catcher_size(&mut self, size: Vec2) {
        let size = sanitize_size(size, DEFAULT_CATCHER_SIZE);
        self.catcher.width = size.x;
        self.catcher.height = size.y;
        self.catcher.x = self.field.clamp_x(self.catcher.x, self.catcher.width);
    }

    /// Size for objects spawned from now on
    pub fn set_object_size(&mut self, size: Vec2) {
        self.object_size = sanitize_size(size, DEFAULT_OBJECT_DIMS);
    }
}

const DEFAULT_CATCHER_SIZE: Vec2 = Vec2::new(DEFAULT_CATCHER_WIDTH, DEFAULT_CATCHER_HEIGHT);
const DEFAULT_OBJECT_DIMS: Vec2 = Vec2::splat(DEFAULT_OBJECT_SIZE);

/// Replace negative or non-finite dimensions with the matching placeholder
fn sanitize_size(size: Vec2, fallback: Vec2) -> Vec2 {
    let fix = |v: f32, fallback: f32| if v.is_finite() && v >= 0.0 { v } else { fallback };
    Vec2::new(fix(size.x, fallback.x), fix(size.y, fallback.y))
}
