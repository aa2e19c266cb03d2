//! Test utilities and instrumented element types for cclib development.
//!
//! Container tests need to observe what happens to the values they hold:
//! how many were constructed, cloned and dropped, and what happens when a
//! clone fails half-way. [`Lifecycle`] is a shared set of counters, and
//! [`Tracked`] is an element type that reports to one. Failure-injection
//! types live in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub use fixtures::{Fragile, COUNTDOWN, COUNTUP};

#[derive(Debug, Default)]
struct Counts {
    created: AtomicUsize,
    cloned: AtomicUsize,
    dropped: AtomicUsize,
}

/// Shared lifecycle counters for [`Tracked`] values.
///
/// Cloning a `Lifecycle` shares the same counters.
#[derive(Clone, Debug, Default)]
pub struct Lifecycle {
    counts: Arc<Counts>,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fresh value that reports to these counters.
    pub fn track(&self, value: i32) -> Tracked {
        self.counts.created.fetch_add(1, Ordering::Relaxed);
        Tracked {
            value,
            lifecycle: self.clone(),
        }
    }

    /// Values created through [`track`](Self::track).
    pub fn created(&self) -> usize {
        self.counts.created.load(Ordering::Relaxed)
    }

    /// Values produced by `Clone::clone`.
    pub fn cloned(&self) -> usize {
        self.counts.cloned.load(Ordering::Relaxed)
    }

    /// Values dropped.
    pub fn dropped(&self) -> usize {
        self.counts.dropped.load(Ordering::Relaxed)
    }

    /// Total constructions of any kind.
    pub fn constructed(&self) -> usize {
        self.created() + self.cloned()
    }

    /// Values constructed and not yet dropped.
    pub fn live(&self) -> usize {
        self.constructed() - self.dropped()
    }

    /// Snapshot of `(constructed, dropped)` for before/after comparisons.
    pub fn snapshot(&self) -> (usize, usize) {
        (self.constructed(), self.dropped())
    }
}

/// An `i32` that counts its own clones and drops.
pub struct Tracked {
    value: i32,
    lifecycle: Lifecycle,
}

impl Tracked {
    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn set(&mut self, value: i32) {
        self.value = value;
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        self.lifecycle.counts.cloned.fetch_add(1, Ordering::Relaxed);
        Self {
            value: self.value,
            lifecycle: self.lifecycle.clone(),
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.lifecycle.counts.dropped.fetch_add(1, Ordering::Relaxed);
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl PartialEq<i32> for Tracked {
    fn eq(&self, other: &i32) -> bool {
        self.value == *other
    }
}

impl fmt::Debug for Tracked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tracked({})", self.value)
    }
}
