//! Collision detection and scoring
//!
//! Each frame every active object falls, then is classified against the
//! catcher. Catch is checked before miss, and the catch band always sits
//! above the miss line, so an object resolves at most once.

use super::state::{Catcher, FallingObject, GameEvent, Session};
use crate::config::Field;
use crate::consts::SCORE_PER_CATCH;

/// How an object ended up after this frame's integration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Caught,
    Missed,
    InFlight,
}

/// True if the object's center lies strictly inside the catcher's catch band
pub fn in_catch_band(obj: &FallingObject, catcher: &Catcher) -> bool {
    obj.pos.x > catcher.left()
        && obj.pos.x < catcher.right()
        && obj.pos.y > catcher.y - catcher.height
        && obj.pos.y < catcher.y
}

/// Classify an already-moved object
pub fn classify(obj: &FallingObject, catcher: &Catcher, field: &Field) -> Outcome {
    if in_catch_band(obj, catcher) {
        Outcome::Caught
    } else if obj.pos.y > field.height() {
        Outcome::Missed
    } else {
        Outcome::InFlight
    }
}

/// Integrate and resolve every active object.
///
/// Sweeps from the end of the list so in-place removal leaves the order of
/// the objects still to be visited untouched. Stops as soon as the last life
/// is lost; unvisited objects keep their positions for the game over screen.
pub fn resolve(session: &mut Session, dt: f32) {
    let mut i = session.objects.len();
    while i > 0 {
        i -= 1;

        let obj = &mut session.objects[i];
        obj.pos.y += obj.fall_speed * dt;

        match classify(obj, &session.catcher, &session.field) {
            Outcome::InFlight => {}
            Outcome::Caught => {
                let obj = session.objects.remove(i);
                session.score = session.score.saturating_add(SCORE_PER_CATCH);
                log::debug!("Caught object {} (score {})", obj.id, session.score);
                session.emit(GameEvent::Caught {
                    id: obj.id,
                    score: session.score,
                });
            }
            Outcome::Missed => {
                let obj = session.objects.remove(i);
                session.lives = session.lives.saturating_sub(1);
                log::debug!("Missed object {} (lives {})", obj.id, session.lives);
                session.emit(GameEvent::Missed {
                    id: obj.id,
                    lives: session.lives,
                });
                if session.lives == 0 {
                    session.emit(GameEvent::LifeDepleted);
                    return;
                }
            }
        }
    }
}
