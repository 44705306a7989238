//! Menu / Playing / GameOver state machine
//!
//! Transitions:
//! - `Menu --start--> Playing`
//! - `Playing --life depleted--> GameOver`
//! - `GameOver --dwell elapsed--> Menu`
//! - `Playing | GameOver --return_to_menu--> Menu`
//!
//! Requests that don't match one of these are ignored.

use super::mode::ModeId;
use super::state::{GameEvent, GamePhase, Session};
use crate::consts::GAME_OVER_DWELL_SECS;

/// Pick the mode for the next round.
///
/// Accepted in any phase; a round already in progress keeps the mode it was
/// started with. Unknown ids are ignored. Returns true if the id was valid.
pub fn select_mode(session: &mut Session, id: &str) -> bool {
    let Some(mode) = ModeId::from_str(id) else {
        log::warn!("Ignoring unknown mode '{id}'");
        return false;
    };
    if session.selected_mode != mode {
        session.selected_mode = mode;
        log::info!("Mode selected: {}", mode.label());
        session.emit(GameEvent::ModeSelected { mode });
    }
    true
}

/// Start a round with the given mode. Only honored from the menu.
pub fn start(session: &mut Session, id: &str) -> bool {
    let Some(mode) = ModeId::from_str(id) else {
        log::warn!("Ignoring start with unknown mode '{id}'");
        return false;
    };
    if session.phase != GamePhase::Menu {
        log::debug!("Ignoring start while in {:?}", session.phase);
        return false;
    }
    session.selected_mode = mode;
    begin_round(session);
    true
}

/// Start a round with the currently selected mode
pub fn start_selected(session: &mut Session) -> bool {
    let id = session.selected_mode.as_str();
    start(session, id)
}

fn begin_round(session: &mut Session) {
    session.mode = session.selected_mode.mode();
    session.score = 0;
    session.lives = session.mode.starting_lives;
    session.objects.clear();
    session.spawn_accumulator = 0.0;
    session.dwell_accumulator = 0.0;
    session.catcher.recenter(&session.field);
    session.phase = GamePhase::Playing;

    log::info!(
        "Round started: {} ({} lives)",
        session.mode.id.label(),
        session.lives
    );
    session.emit(GameEvent::Started {
        mode: session.mode.id,
    });
}

/// React to the collision engine running out of lives
pub fn on_life_depleted(session: &mut Session) {
    if session.phase != GamePhase::Playing {
        return;
    }
    session.phase = GamePhase::GameOver;
    session.dwell_accumulator = 0.0;
    log::info!("Game over with score {}", session.score);
    session.emit(GameEvent::GameOver {
        score: session.score,
    });
}

/// Count down the game over screen; returns to the menu once it has elapsed
pub fn advance_dwell(session: &mut Session, dt: f32) {
    if session.phase != GamePhase::GameOver {
        return;
    }
    session.dwell_accumulator += dt;
    if session.dwell_accumulator >= GAME_OVER_DWELL_SECS {
        enter_menu(session);
    }
}

/// Leave the current round early. No-op on the menu.
pub fn return_to_menu(session: &mut Session) -> bool {
    match session.phase {
        GamePhase::Menu => false,
        GamePhase::Playing | GamePhase::GameOver => {
            enter_menu(session);
            true
        }
    }
}

fn enter_menu(session: &mut Session) {
    session.phase = GamePhase::Menu;
    session.objects.clear();
    session.score = 0;
    session.lives = session.selected_mode.mode().starting_lives;
    session.dwell_accumulator = 0.0;
    log::info!("Returned to menu");
    session.emit(GameEvent::ReturnedToMenu);
}
