//! Timed object spawning
//!
//! Spawns at most one object per frame no matter how large the frame delta
//! is, which bounds the entity count after a hitch.

use glam::Vec2;
use rand::Rng;

use super::mode::Mode;
use super::state::{FallingObject, GameEvent, Session};
use crate::config::Field;

/// Description of an object the spawner wants created
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnSpec {
    pub pos: Vec2,
    pub size: Vec2,
    pub fall_speed: f32,
}

/// Accumulate `dt` and decide whether an object is due.
///
/// The accumulator resets to zero (not by subtracting the interval) once it
/// strictly exceeds the mode's spawn interval.
pub fn advance<R: Rng>(
    accumulator: &mut f32,
    dt: f32,
    mode: &Mode,
    field: &Field,
    size: Vec2,
    rng: &mut R,
) -> Option<SpawnSpec> {
    *accumulator += dt;
    if *accumulator <= mode.spawn_interval {
        return None;
    }
    *accumulator = 0.0;

    Some(SpawnSpec {
        pos: Vec2::new(random_x(field, size.x, rng), -size.y),
        size,
        fall_speed: mode.fall_speed,
    })
}

/// Uniform x in `[w/2, field_width - w/2]`
fn random_x<R: Rng>(field: &Field, width: f32, rng: &mut R) -> f32 {
    let span = field.width() - width;
    if span <= 0.0 {
        return field.center_x();
    }
    rng.random::<f32>() * span + width / 2.0
}

/// Run the spawner against the session, appending any new object
pub fn spawn_step(session: &mut Session, dt: f32) {
    let spec = advance(
        &mut session.spawn_accumulator,
        dt,
        &session.mode,
        &session.field,
        session.object_size,
        &mut session.rng,
    );

    if let Some(spec) = spec {
        let id = session.next_entity_id();
        session.objects.push(FallingObject {
            id,
            pos: spec.pos,
            size: spec.size,
            fall_speed: spec.fall_speed,
        });
        log::debug!("Spawned object {} at x={:.1}", id, spec.pos.x);
        session.emit(GameEvent::Spawned { id });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::mode::ModeId;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn setup() -> (Field, Pcg32) {
        (Field::new(400.0, 700.0), Pcg32::seed_from_u64(7))
    }

    #[test]
    fn test_no_spawn_before_interval() {
        let (field, mut rng) = setup();
        let mode = ModeId::Normal.mode();
        let mut acc = 0.0;
        assert!(advance(&mut acc, 0.1, &mode, &field, Vec2::splat(40.0), &mut rng).is_none());
        assert!(advance(&mut acc, 0.1, &mode, &field, Vec2::splat(40.0), &mut rng).is_none());
        assert!((acc - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_exact_interval_does_not_spawn() {
        let (field, mut rng) = setup();
        let mode = ModeId::Normal.mode();
        let mut acc = 0.0;
        assert!(advance(&mut acc, 0.28, &mode, &field, Vec2::splat(40.0), &mut rng).is_none());
        assert!(advance(&mut acc, 0.001, &mode, &field, Vec2::splat(40.0), &mut rng).is_some());
        assert_eq!(acc, 0.0);
    }

    #[test]
    fn test_huge_dt_spawns_once() {
        let (field, mut rng) = setup();
        let mode = ModeId::Normal.mode();
        let mut acc = 0.0;
        let spec = advance(&mut acc, 1.0, &mode, &field, Vec2::splat(40.0), &mut rng);
        assert!(spec.is_some());
        assert_eq!(acc, 0.0);
        // The overflow is discarded, so the next small step does not spawn again
        assert!(advance(&mut acc, 0.01, &mode, &field, Vec2::splat(40.0), &mut rng).is_none());
    }

    #[test]
    fn test_spawn_placement() {
        let (field, mut rng) = setup();
        let mode = ModeId::Hard.mode();
        let size = Vec2::new(40.0, 30.0);
        for _ in 0..500 {
            let mut acc = 1.0;
            let spec = advance(&mut acc, 0.0, &mode, &field, size, &mut rng).unwrap();
            assert!(spec.pos.x >= 20.0 && spec.pos.x <= 380.0);
            assert_eq!(spec.pos.y, -30.0);
            assert_eq!(spec.fall_speed, 1200.0);
        }
    }

    #[test]
    fn test_object_wider_than_field() {
        let (field, mut rng) = setup();
        let mode = ModeId::Easy.mode();
        let mut acc = 1.0;
        let spec = advance(&mut acc, 0.0, &mode, &field, Vec2::splat(500.0), &mut rng).unwrap();
        assert_eq!(spec.pos.x, 200.0);
    }
}
