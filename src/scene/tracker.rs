//! Pupil tracking
//!
//! Maps an eye center and the pointer position to a bounded pupil offset
//! pointing toward the pointer.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{FALLOFF_RADIUS, PUPIL_MAX_OFFSET};

/// Tuning for the pupil offset curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerParams {
    /// Maximum pupil displacement
    pub max_offset: f32,
    /// Pointer distance at which the displacement saturates
    pub falloff_radius: f32,
}

impl Default for TrackerParams {
    fn default() -> Self {
        Self {
            max_offset: PUPIL_MAX_OFFSET,
            falloff_radius: FALLOFF_RADIUS,
        }
    }
}

impl TrackerParams {
    /// Replace non-finite or non-positive values with their defaults.
    ///
    /// A negative radius or offset would flip the pupil away from the
    /// pointer, and zero would divide by zero.
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        Self {
            max_offset: positive_or("max_offset", self.max_offset, defaults.max_offset),
            falloff_radius: positive_or(
                "falloff_radius",
                self.falloff_radius,
                defaults.falloff_radius,
            ),
        }
    }

    /// Offset of a pupil from `eye` toward `pointer`.
    ///
    /// Magnitude is `max_offset * min(1, distance / falloff_radius)`. A zero
    /// distance divides by 1 instead, giving a zero offset.
    #[inline]
    pub fn offset(&self, eye: Vec2, pointer: Vec2) -> Vec2 {
        let delta = pointer - eye;
        let distance = delta.length();
        let factor = (distance / self.falloff_radius).min(1.0);
        let divisor = if distance == 0.0 { 1.0 } else { distance };
        delta / divisor * self.max_offset * factor
    }
}

fn positive_or(name: &str, value: f32, default: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        log::warn!("Ignoring tracker {} = {}, using {}", name, value, default);
        default
    }
}

/// Pupil offset with the default tuning
#[inline]
pub fn pupil_offset(eye: Vec2, pointer: Vec2) -> Vec2 {
    TrackerParams::default().offset(eye, pointer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn test_saturated_at_falloff_radius() {
        let offset = pupil_offset(Vec2::new(100.0, 100.0), Vec2::new(200.0, 100.0));
        assert!(approx(offset, Vec2::new(12.0, 0.0)));
    }

    #[test]
    fn test_half_distance_half_offset() {
        let offset = pupil_offset(Vec2::new(100.0, 100.0), Vec2::new(150.0, 100.0));
        assert!(approx(offset, Vec2::new(6.0, 0.0)));
    }

    #[test]
    fn test_pointer_on_eye_is_zero() {
        let offset = pupil_offset(Vec2::new(100.0, 100.0), Vec2::new(100.0, 100.0));
        assert_eq!(offset, Vec2::ZERO);
    }

    #[test]
    fn test_far_pointer_clamped() {
        let offset = pupil_offset(Vec2::ZERO, Vec2::new(-3000.0, 4000.0));
        assert!((offset.length() - PUPIL_MAX_OFFSET).abs() < 1e-4);
        assert!(approx(offset, Vec2::new(-7.2, 9.6)));
    }

    #[test]
    fn test_custom_params() {
        let params = TrackerParams {
            max_offset: 20.0,
            falloff_radius: 40.0,
        };
        let offset = params.offset(Vec2::ZERO, Vec2::new(0.0, 10.0));
        assert!(approx(offset, Vec2::new(0.0, 5.0)));
    }

    #[test]
    fn test_sanitized_replaces_bad_values() {
        let params = TrackerParams {
            max_offset: -12.0,
            falloff_radius: 0.0,
        }
        .sanitized();
        assert_eq!(params, TrackerParams::default());

        let params = TrackerParams {
            max_offset: f32::NAN,
            falloff_radius: f32::INFINITY,
        }
        .sanitized();
        assert_eq!(params, TrackerParams::default());
    }

    #[test]
    fn test_sanitized_keeps_valid_values() {
        let params = TrackerParams {
            max_offset: 20.0,
            falloff_radius: 40.0,
        };
        assert_eq!(params.sanitized(), params);
    }

    fn point() -> impl Strategy<Value = Vec2> {
        (-2000.0f32..2000.0, -2000.0f32..2000.0).prop_map(|(x, y)| Vec2::new(x, y))
    }

    proptest! {
        #[test]
        fn offset_points_toward_pointer(eye in point(), pointer in point()) {
            let delta = pointer - eye;
            prop_assume!(delta.length() > 1e-2);
            let offset = pupil_offset(eye, pointer);
            prop_assert!(offset.dot(delta) > 0.0);
            // Collinear: cross product relative to both magnitudes is ~0
            let cross = offset.perp_dot(delta) / (offset.length() * delta.length());
            prop_assert!(cross.abs() < 1e-3);
        }

        #[test]
        fn offset_never_exceeds_max(eye in point(), pointer in point()) {
            let offset = pupil_offset(eye, pointer);
            prop_assert!(offset.length() <= PUPIL_MAX_OFFSET + 1e-3);
        }

        #[test]
        fn magnitude_monotonic_then_flat(
            angle in 0.0f32..std::f32::consts::TAU,
            near in 0.0f32..300.0,
            step in 0.0f32..300.0,
        ) {
            let dir = Vec2::new(angle.cos(), angle.sin());
            let far = near + step;
            let a = pupil_offset(Vec2::ZERO, dir * near).length();
            let b = pupil_offset(Vec2::ZERO, dir * far).length();
            prop_assert!(b + 1e-3 >= a);
            if near >= FALLOFF_RADIUS {
                prop_assert!((a - b).abs() < 1e-3);
                prop_assert!((a - PUPIL_MAX_OFFSET).abs() < 1e-3);
            }
        }
    }
}
