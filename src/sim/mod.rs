//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Time only enters through the `dt` handed to [`tick`]
//! - Seeded RNG only
//! - No rendering, audio or platform dependencies

pub mod catcher;
pub mod collision;
pub mod machine;
pub mod mode;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{Outcome, classify, in_catch_band};
pub use mode::{Mode, ModeId};
pub use spawner::SpawnSpec;
pub use state::{
    Catcher, FallingObject, GameEvent, GamePhase, Session, Tracking, TrackingPolicy,
    catcher_size_from_sprite, object_size_from_sprite,
};
pub use tick::tick;
