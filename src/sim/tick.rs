//! Per-frame simulation tick
//!
//! Consumes whatever delta the host frame callback measured. Order within a
//! playing frame: catcher, spawner, collisions, then the state machine.

use super::state::{GameEvent, GamePhase, Session};
use super::{catcher, collision, machine, spawner};
use crate::sanitize_dt;

/// Advance the game by one rendered frame.
///
/// `session.events` is cleared first, so afterwards it holds only what this
/// frame produced. Drain anything emitted by lifecycle calls before ticking.
pub fn tick(session: &mut Session, dt: f32) {
    session.events.clear();
    let dt = sanitize_dt(dt, session.max_frame_dt);

    match session.phase {
        GamePhase::Menu => {}

        GamePhase::Playing => {
            catcher::advance(&mut session.catcher, &session.tracking, &session.field, dt);
            spawner::spawn_step(session, dt);

            collision::resolve(session, dt);

            let depleted = session
                .events
                .iter()
                .any(|e| matches!(e, GameEvent::LifeDepleted));
            if depleted {
                machine::on_life_depleted(session);
            }
        }

        GamePhase::GameOver => {
            machine::advance_dwell(session, dt);
        }
    }
}
