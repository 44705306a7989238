//! Catcher controller
//!
//! Input arrives already mapped into field coordinates; this module only
//! decides how the catcher follows it and keeps it inside the field.

use super::state::{Catcher, Tracking, TrackingPolicy};
use crate::config::Field;

/// Record the latest input position. Non-finite input is ignored.
pub fn set_input_position(catcher: &mut Catcher, field_x: f32) {
    if field_x.is_finite() {
        catcher.target_x = field_x;
    }
}

/// Move the catcher toward its target, then clamp it to the field
pub fn advance(catcher: &mut Catcher, tracking: &Tracking, field: &Field, _dt: f32) {
    match tracking.policy {
        TrackingPolicy::Instant => catcher.x = catcher.target_x,
        TrackingPolicy::Smoothed => {
            catcher.x += (catcher.target_x - catcher.x) * tracking.smoothing_factor;
        }
    }
    catcher.x = field.clamp_x(catcher.x, catcher.width);
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn setup() -> (Catcher, Field) {
        let field = Field::new(400.0, 700.0);
        let catcher = Catcher::new(&field, 620.0, Vec2::new(100.0, 14.0));
        (catcher, field)
    }

    #[test]
    fn test_instant_tracking() {
        let (mut catcher, field) = setup();
        set_input_position(&mut catcher, 300.0);
        advance(&mut catcher, &Tracking::default(), &field, 0.016);
        assert_eq!(catcher.x, 300.0);
    }

    #[test]
    fn test_smoothed_tracking() {
        let (mut catcher, field) = setup();
        let tracking = Tracking::new(TrackingPolicy::Smoothed, 0.25);
        set_input_position(&mut catcher, 300.0);
        advance(&mut catcher, &tracking, &field, 0.016);
        // 200 + (300 - 200) * 0.25
        assert_eq!(catcher.x, 225.0);
        for _ in 0..100 {
            advance(&mut catcher, &tracking, &field, 0.016);
        }
        assert!((catcher.x - 300.0).abs() < 0.01);
    }

    #[test]
    fn test_clamped_to_field() {
        let (mut catcher, field) = setup();
        set_input_position(&mut catcher, -5000.0);
        advance(&mut catcher, &Tracking::default(), &field, 0.016);
        assert_eq!(catcher.x, 50.0);

        set_input_position(&mut catcher, 1e9);
        advance(&mut catcher, &Tracking::default(), &field, 0.016);
        assert_eq!(catcher.x, 350.0);
    }

    #[test]
    fn test_smoothed_also_clamped() {
        let (mut catcher, field) = setup();
        let tracking = Tracking::new(TrackingPolicy::Smoothed, 1.0);
        set_input_position(&mut catcher, 1e6);
        advance(&mut catcher, &tracking, &field, 0.016);
        assert_eq!(catcher.x, 350.0);
    }

    #[test]
    fn test_nan_input_ignored() {
        let (mut catcher, field) = setup();
        set_input_position(&mut catcher, 120.0);
        set_input_position(&mut catcher, f32::NAN);
        advance(&mut catcher, &Tracking::default(), &field, 0.016);
        assert_eq!(catcher.x, 120.0);
    }
}
