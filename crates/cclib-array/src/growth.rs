//! Capacity growth policy.
//!
//! When a push finds the buffer full, the capacity becomes
//! `GROWTH_FACTOR * old + GROWTH_INCREMENT`. The increment guarantees
//! progress from an empty buffer, and the geometric factor bounds the total
//! relocation cost of `n` pushes to O(n).

use crate::error::ArrayError;

/// Multiplier applied to the exhausted capacity.
pub const GROWTH_FACTOR: usize = 2;

/// Constant added after scaling, so that zero capacity still grows.
pub const GROWTH_INCREMENT: usize = 1;

/// Capacity to grow to once `current` slots are exhausted.
///
/// Returns [`ArrayError::CapacityOverflow`] if the result does not fit in
/// `usize`.
pub fn grown_capacity(current: usize) -> Result<usize, ArrayError> {
    current
        .checked_mul(GROWTH_FACTOR)
        .and_then(|scaled| scaled.checked_add(GROWTH_INCREMENT))
        .ok_or(ArrayError::CapacityOverflow {
            requested: current,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grows_from_zero() {
        assert_eq!(grown_capacity(0), Ok(1));
    }

    #[test]
    fn sequence_is_two_n_plus_one() {
        let mut cap = 0;
        let mut seen = Vec::new();
        for _ in 0..5 {
            cap = grown_capacity(cap).unwrap();
            seen.push(cap);
        }
        assert_eq!(seen, [1, 3, 7, 15, 31]);
    }

    #[test]
    fn overflow_is_reported() {
        let result = grown_capacity(usize::MAX / 2 + 1);
        assert!(matches!(result, Err(ArrayError::CapacityOverflow { .. })));
    }

    #[test]
    fn largest_representable_step() {
        // 2 * (MAX / 2) + 1 == MAX for odd MAX.
        assert_eq!(grown_capacity(usize::MAX / 2), Ok(usize::MAX));
    }
}
