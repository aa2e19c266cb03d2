//! Scalar helpers that work on anything ordered.
//!
//! Unlike [`Ord::min`] these only need [`PartialOrd`], so they accept
//! floats. With a NaN argument the result is whichever operand the single
//! comparison falls through to.

/// The smaller of `a` and `b`; `a` on ties.
#[inline]
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if b < a {
        b
    } else {
        a
    }
}

/// The larger of `a` and `b`; `a` on ties.
#[inline]
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if a < b {
        b
    } else {
        a
    }
}

/// `a` limited to `[lower, upper]`.
#[inline]
pub fn clamp<T: PartialOrd>(a: T, lower: T, upper: T) -> T {
    min(max(a, lower), upper)
}

/// `a` limited to `[0, 1]`.
#[inline]
pub fn saturate(a: f32) -> f32 {
    clamp(a, 0.0, 1.0)
}

/// `1.0`, `-1.0` or `0.0` according to the sign of `x`.
///
/// Zero (of either sign) and NaN map to `0.0`, which is where this differs
/// from [`f32::signum`].
#[inline]
pub fn sign(x: f32) -> f32 {
    ((x > 0.0) as i32 - (x < 0.0) as i32) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_max_prefer_first_on_ties() {
        assert_eq!(min(1, 2), 1);
        assert_eq!(max(1, 2), 2);
        assert_eq!(min(0.0f32, -0.0).to_bits(), 0.0f32.to_bits());
        assert_eq!(max(0.0f32, -0.0).to_bits(), 0.0f32.to_bits());
    }

    #[test]
    fn clamp_and_saturate() {
        assert_eq!(clamp(5, 0, 3), 3);
        assert_eq!(clamp(-5, 0, 3), 0);
        assert_eq!(clamp(2, 0, 3), 2);
        assert_eq!(saturate(1.5), 1.0);
        assert_eq!(saturate(-0.5), 0.0);
        assert_eq!(saturate(0.25), 0.25);
    }

    #[test]
    fn sign_of_zero_is_zero() {
        assert_eq!(sign(3.0), 1.0);
        assert_eq!(sign(-0.1), -1.0);
        assert_eq!(sign(0.0), 0.0);
        assert_eq!(sign(-0.0), 0.0);
        assert_eq!(sign(f32::NAN), 0.0);
    }
}
