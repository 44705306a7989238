//! Game facade
//!
//! The host calls in through [`Game`] (frame ticks, input, lifecycle buttons)
//! and hears back through a [`GameListener`]. Nothing here knows about any
//! particular UI toolkit or audio API.

use glam::Vec2;
use serde::Serialize;

use crate::config::GameConfig;
use crate::sim::{
    self, GameEvent, GamePhase, ModeId, Session, catcher_size_from_sprite, machine,
    object_size_from_sprite,
};

/// Outbound notifications for audio/UI collaborators.
///
/// Every method has an empty default so listeners only implement what they use.
pub trait GameListener {
    fn on_started(&mut self, _mode: ModeId) {}
    fn on_caught(&mut self, _score: u32) {}
    fn on_missed(&mut self, _lives: u32) {}
    fn on_game_over(&mut self, _score: u32) {}
    fn on_returned_to_menu(&mut self) {}
}

/// Listener that ignores everything
impl GameListener for () {}

/// An axis-aligned rectangle given by its center
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub center: Vec2,
    pub size: Vec2,
}

/// Read-only view of everything a renderer or HUD needs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u32,
    pub lives: u32,
    /// Label of the mode shown in the HUD
    pub mode_label: &'static str,
    pub selected_mode: ModeId,
    /// Catcher rect; `center.y` is the middle of the catch band
    pub catcher: Rect,
    pub objects: Vec<Rect>,
    /// Renderers swap to the "lost" catcher sprite while this is set
    pub catcher_lost: bool,
    /// Fraction of the game over dwell that has elapsed (0 outside GameOver)
    pub dwell_progress: f32,
}

/// A running game: one session plus the listener its events go to
pub struct Game<L: GameListener = ()> {
    session: Session,
    listener: L,
}

impl Game<()> {
    /// Game without a listener
    pub fn headless(config: &GameConfig) -> Self {
        Self::new(config, ())
    }
}

impl<L: GameListener> Game<L> {
    pub fn new(config: &GameConfig, listener: L) -> Self {
        log::info!(
            "Game created: field {}x{}, seed {}",
            config.field().width(),
            config.field().height(),
            config.seed
        );
        Self {
            session: Session::new(config),
            listener,
        }
    }

    /// Drive one frame. Call once per display refresh with the measured delta.
    pub fn on_frame(&mut self, dt: f32) {
        sim::tick(&mut self.session, dt);
        self.dispatch();
    }

    /// Feed the catcher target, already mapped to field coordinates
    pub fn on_input_position(&mut self, field_x: f32) {
        sim::catcher::set_input_position(&mut self.session.catcher, field_x);
    }

    /// Start a round with `mode_id`. Ignored unless on the menu.
    pub fn start(&mut self, mode_id: &str) -> bool {
        let started = machine::start(&mut self.session, mode_id);
        self.dispatch();
        started
    }

    /// Start a round with the mode picked on the menu
    pub fn start_selected(&mut self) -> bool {
        let started = machine::start_selected(&mut self.session);
        self.dispatch();
        started
    }

    pub fn select_mode(&mut self, mode_id: &str) -> bool {
        let valid = machine::select_mode(&mut self.session, mode_id);
        self.dispatch();
        valid
    }

    pub fn return_to_menu(&mut self) -> bool {
        let returned = machine::return_to_menu(&mut self.session);
        self.dispatch();
        returned
    }

    /// Update the catcher's collision size, e.g. once its sprite has loaded
    pub fn set_catcher_size(&mut self, width: f32, height: f32) {
        self.session.set_catcher_size(Vec2::new(width, height));
    }

    /// Size used for objects spawned from now on
    pub fn set_object_size(&mut self, width: f32, height: f32) {
        self.session.set_object_size(Vec2::new(width, height));
    }

    /// Size the catcher from its sprite's natural dimensions
    pub fn set_catcher_sprite(&mut self, natural_width: f32, natural_height: f32) {
        self.session
            .set_catcher_size(catcher_size_from_sprite(natural_width, natural_height));
    }

    /// Size future objects from their sprite's natural dimensions
    pub fn set_object_sprite(&mut self, natural_width: f32, natural_height: f32) {
        self.session
            .set_object_size(object_size_from_sprite(natural_width, natural_height));
    }

    pub fn phase(&self) -> GamePhase {
        self.session.phase
    }

    pub fn score(&self) -> u32 {
        self.session.score
    }

    pub fn lives(&self) -> u32 {
        self.session.lives
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    /// Mode shown in the HUD: the active one while playing, otherwise the selection
    pub fn mode_label(&self) -> &'static str {
        match self.session.phase {
            GamePhase::Menu => self.session.selected_mode.label(),
            GamePhase::Playing | GamePhase::GameOver => self.session.mode.id.label(),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        let s = &self.session;
        let catcher = Rect {
            center: Vec2::new(s.catcher.x, s.catcher.y - s.catcher.height / 2.0),
            size: Vec2::new(s.catcher.width, s.catcher.height),
        };
        let dwell_progress = if s.phase == GamePhase::GameOver {
            (s.dwell_accumulator / crate::consts::GAME_OVER_DWELL_SECS).clamp(0.0, 1.0)
        } else {
            0.0
        };
        Snapshot {
            phase: s.phase,
            score: s.score,
            lives: s.lives,
            mode_label: self.mode_label(),
            selected_mode: s.selected_mode,
            catcher,
            objects: s
                .objects
                .iter()
                .map(|o| Rect {
                    center: o.pos,
                    size: o.size,
                })
                .collect(),
            catcher_lost: s.phase == GamePhase::GameOver,
            dwell_progress,
        }
    }

    fn dispatch(&mut self) {
        for event in self.session.drain_events() {
            match event {
                GameEvent::Started { mode } => self.listener.on_started(mode),
                GameEvent::Caught { score, .. } => self.listener.on_caught(score),
                GameEvent::Missed { lives, .. } => self.listener.on_missed(lives),
                GameEvent::GameOver { score } => self.listener.on_game_over(score),
                GameEvent::ReturnedToMenu => self.listener.on_returned_to_menu(),
                GameEvent::ModeSelected { .. }
                | GameEvent::Spawned { .. }
                | GameEvent::LifeDepleted => {}
            }
        }
    }
}
