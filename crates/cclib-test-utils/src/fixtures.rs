//! Reusable container test fixtures.
//!
//! - [`COUNTUP`] / [`COUNTDOWN`]: the two canonical five-element lists used
//!   by construction and swap tests.
//! - [`Fragile`]: an element whose `clone` panics once a shared budget runs
//!   out, for exercising rollback paths.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::{Lifecycle, Tracked};

/// `[1, 2, 3, 4, 5]`.
pub const COUNTUP: [i32; 5] = [1, 2, 3, 4, 5];

/// `[50, 49, 48, 47, 46]`.
pub const COUNTDOWN: [i32; 5] = [50, 49, 48, 47, 46];

/// Build [`Tracked`] values for each entry of `values`.
pub fn tracked(lifecycle: &Lifecycle, values: &[i32]) -> Vec<Tracked> {
    values.iter().map(|&v| lifecycle.track(v)).collect()
}

/// Panics on `clone` once a configurable number of clones has happened.
///
/// All values created from the same [`Fragile::family`] share one budget,
/// so "the fourth clone across the whole container fails" is expressible.
/// The inner [`Tracked`] keeps lifecycle counts accurate across the panic.
#[derive(Debug)]
pub struct Fragile {
    inner: Tracked,
    budget: Arc<AtomicUsize>,
}

impl Fragile {
    /// Create `values` as fragile elements sharing a budget of
    /// `clone_budget` successful clones.
    pub fn family(lifecycle: &Lifecycle, values: &[i32], clone_budget: usize) -> Vec<Fragile> {
        let budget = Arc::new(AtomicUsize::new(clone_budget));
        values
            .iter()
            .map(|&v| Fragile {
                inner: lifecycle.track(v),
                budget: budget.clone(),
            })
            .collect()
    }

    pub fn value(&self) -> i32 {
        self.inner.value()
    }

    /// Successful clones left before the next one panics.
    pub fn remaining_budget(&self) -> usize {
        self.budget.load(Ordering::Relaxed)
    }
}

impl Clone for Fragile {
    fn clone(&self) -> Self {
        let left = self.budget.load(Ordering::Relaxed);
        if left == 0 {
            panic!("clone budget exhausted (value {})", self.inner.value());
        }
        self.budget.store(left - 1, Ordering::Relaxed);
        Self {
            inner: self.inner.clone(),
            budget: self.budget.clone(),
        }
    }
}

impl PartialEq<i32> for Fragile {
    fn eq(&self, other: &i32) -> bool {
        self.inner == *other
    }
}
