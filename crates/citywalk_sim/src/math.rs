//! Small vector helpers shared by movement and input code

use bevy::prelude::*;

/// Length below which a direction is treated as "no input".
///
/// Squared to avoid the sqrt on the hot path (same threshold the movement
/// system uses before integrating a displacement).
pub const MIN_DIRECTION_LENGTH_SQUARED: f32 = 1e-4;

/// Unit-length vector in the direction of `v`.
///
/// Returns `Vec3::ZERO` for zero or near-zero input instead of dividing by
/// a vanishing length and propagating NaN into transforms.
pub fn safe_normalize(v: Vec3) -> Vec3 {
    if v.length_squared() < MIN_DIRECTION_LENGTH_SQUARED {
        return Vec3::ZERO;
    }
    v.normalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_produces_unit_length() {
        let v = safe_normalize(Vec3::new(3.0, -4.0, 12.0));
        assert!((v.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn normalize_preserves_direction() {
        let v = safe_normalize(Vec3::new(0.0, 0.0, -7.5));
        assert!((v - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn zero_vector_stays_zero() {
        assert_eq!(safe_normalize(Vec3::ZERO), Vec3::ZERO);
        // Sub-threshold jitter is also treated as no input
        assert_eq!(safe_normalize(Vec3::splat(1e-4)), Vec3::ZERO);
    }

    #[test]
    fn unit_input_is_unchanged() {
        let v = safe_normalize(Vec3::X);
        assert!((v - Vec3::X).length() < 1e-6);
    }
}
