//! Faster, less accurate replacements for common float functions.
//!
//! Error bounds are stated against the standard library. The
//! `accuracy_report` example in `cclib-bench` measures speed and RMSE for
//! each function over a sampled range.

use crate::PI;

/// Reciprocal, `1 / x`.
#[inline]
pub fn rcp(x: f32) -> f32 {
    1.0 / x
}

/// Reciprocal square root, `1 / sqrt(x)`.
#[inline]
pub fn rsqrt(x: f32) -> f32 {
    rcp(x.sqrt())
}

/// Four-quadrant arctangent of `y / x`.
///
/// Piecewise rational approximation; absolute error stays below 0.072 rad.
/// The result has the sign of `y`, and `atan2(0, 0)` is `0` as in
/// [`f32::atan2`].
#[inline]
pub fn atan2(y: f32, x: f32) -> f32 {
    const C1: f32 = PI / 4.0;
    const C2: f32 = PI * 3.0 / 4.0;

    let abs_y = y.abs();
    if abs_y == 0.0 && x == 0.0 {
        return 0.0;
    }
    let angle = if x >= 0.0 {
        C1 - C1 * ((x - abs_y) / (x + abs_y))
    } else {
        C2 - C1 * ((x + abs_y) / (abs_y - x))
    };

    if y < 0.0 {
        -angle
    } else {
        angle
    }
}

/// Sine. Currently the standard implementation.
#[inline]
pub fn sin(x: f32) -> f32 {
    x.sin()
}

/// Cosine. Currently the standard implementation.
#[inline]
pub fn cos(x: f32) -> f32 {
    x.cos()
}
