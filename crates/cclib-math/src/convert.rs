//! Angle conversion and interpolation.

use std::ops::{Add, Mul, Sub};

use crate::fast;
use crate::PI;

/// Degrees to radians.
#[inline]
pub fn radians(deg: f32) -> f32 {
    deg * PI / 180.0
}

/// Radians to degrees.
#[inline]
pub fn degrees(rad: f32) -> f32 {
    rad * 180.0 / PI
}

/// Linear interpolation: `v0` at `t = 0`, `v1` at `t = 1`.
///
/// Works for scalars and for every vector type. `t` is not clamped.
#[inline]
pub fn lerp<T>(v0: T, v1: T, t: f32) -> T
where
    T: Copy + Add<Output = T> + Sub<Output = T>,
    f32: Mul<T, Output = T>,
{
    v0 + t * (v1 - v0)
}

/// Cotangent.
#[inline]
pub fn cot(x: f32) -> f32 {
    fast::cos(x) / fast::sin(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec3;
    use approx::assert_abs_diff_eq;

    #[test]
    fn degree_radian_round_trip() {
        assert_abs_diff_eq!(radians(180.0), PI);
        assert_abs_diff_eq!(degrees(PI / 2.0), 90.0, epsilon = 1e-5);
        assert_abs_diff_eq!(degrees(radians(37.5)), 37.5, epsilon = 1e-5);
    }

    #[test]
    fn lerp_scalars_and_vectors() {
        assert_eq!(lerp(2.0f32, 4.0, 0.5), 3.0);
        assert_eq!(lerp(2.0f32, 4.0, 0.0), 2.0);
        let v = lerp(vec3(0.0, 0.0, 0.0), vec3(2.0, 4.0, 8.0), 0.25);
        assert_eq!(v, vec3(0.5, 1.0, 2.0));
    }

    #[test]
    fn cot_is_reciprocal_tangent() {
        let x = 0.7f32;
        assert_abs_diff_eq!(cot(x), 1.0 / x.tan(), epsilon = 1e-5);
    }
}
