//! Benchmark inputs and accuracy measurement for cclib.
//!
//! - [`BenchConfig`]: seed, sample count and value range for generated inputs
//! - [`sample_values`]: deterministic uniform samples from a [`BenchConfig`]
//! - [`measure`] / [`measure_binary`]: time a fast function against its
//!   reference and report the RMSE between them as an [`Accuracy`]
//!
//! The criterion benches under `benches/` and the `accuracy_report` example
//! build on these.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::fmt;
use std::hint::black_box;
use std::time::Instant;

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Default RNG seed.
pub const DEFAULT_SEED: u64 = 42;
/// Default number of samples.
pub const DEFAULT_SAMPLES: usize = 65_536;
/// Default inclusive lower bound of sampled values.
pub const DEFAULT_RANGE_START: f32 = 0.0;
/// Default exclusive upper bound of sampled values.
pub const DEFAULT_RANGE_END: f32 = 100.0;

/// Inputs for a measurement run.
#[derive(Clone, Debug, PartialEq)]
pub struct BenchConfig {
    /// Seed for the sample generator. Equal seeds give equal samples.
    pub seed: u64,
    /// Number of values to generate.
    pub samples: usize,
    /// Half-open range `[start, end)` the values are drawn from.
    pub range: std::ops::Range<f32>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            samples: DEFAULT_SAMPLES,
            range: DEFAULT_RANGE_START..DEFAULT_RANGE_END,
        }
    }
}

/// Generate `config.samples` uniform values in `config.range`.
pub fn sample_values(config: &BenchConfig) -> Vec<f32> {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let span = config.range.end - config.range.start;
    (0..config.samples)
        .map(|_| {
            // 24 random bits: every value is exactly representable in f32.
            let unit = (rng.next_u32() >> 8) as f32 / (1u32 << 24) as f32;
            config.range.start + unit * span
        })
        .collect()
}

/// Root-mean-square difference of two equally long slices.
///
/// Returns `0.0` for empty input.
///
/// # Panics
///
/// Panics if the slices differ in length.
pub fn rmse(a: &[f32], b: &[f32]) -> f32 {
    assert_eq!(a.len(), b.len(), "rmse over slices of different length");
    if a.is_empty() {
        return 0.0;
    }
    let sum: f64 = a
        .iter()
        .zip(b)
        .map(|(&x, &y)| {
            let diff = f64::from(x) - f64::from(y);
            diff * diff
        })
        .sum();
    (sum / a.len() as f64).sqrt() as f32
}

/// Timing and error of one fast function against its reference.
#[derive(Clone, Debug, PartialEq)]
pub struct Accuracy {
    /// Label printed in reports.
    pub name: String,
    /// Mean nanoseconds per call of the fast function.
    pub fast_ns: f64,
    /// Mean nanoseconds per call of the reference function.
    pub reference_ns: f64,
    /// RMSE between the two result sets.
    pub rmse: f32,
}

impl Accuracy {
    /// How much faster the fast function ran, as a percentage of the
    /// reference time. Negative when it was slower.
    pub fn speedup_percent(&self) -> f64 {
        if self.reference_ns == 0.0 {
            return 0.0;
        }
        (self.reference_ns - self.fast_ns) * 100.0 / self.reference_ns
    }
}

impl fmt::Display for Accuracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: cclib: {:.2}ns - std: {:.2}ns (speedup: {:+.0}% RMSE: {:.3})",
            self.name,
            self.fast_ns,
            self.reference_ns,
            self.speedup_percent(),
            self.rmse
        )
    }
}

/// Time `fast` and `reference` over every value and compare their outputs.
pub fn measure(
    name: &str,
    values: &[f32],
    fast: impl Fn(f32) -> f32,
    reference: impl Fn(f32) -> f32,
) -> Accuracy {
    let (fast_out, fast_ns) = run(values, |i| fast(values[i]));
    let (ref_out, reference_ns) = run(values, |i| reference(values[i]));
    Accuracy {
        name: name.to_owned(),
        fast_ns,
        reference_ns,
        rmse: rmse(&fast_out, &ref_out),
    }
}

/// Like [`measure`] for two-argument functions. Value `i` is paired with
/// value `len - 1 - i`.
pub fn measure_binary(
    name: &str,
    values: &[f32],
    fast: impl Fn(f32, f32) -> f32,
    reference: impl Fn(f32, f32) -> f32,
) -> Accuracy {
    let last = values.len().saturating_sub(1);
    let (fast_out, fast_ns) = run(values, |i| fast(values[i], values[last - i]));
    let (ref_out, reference_ns) = run(values, |i| reference(values[i], values[last - i]));
    Accuracy {
        name: name.to_owned(),
        fast_ns,
        reference_ns,
        rmse: rmse(&fast_out, &ref_out),
    }
}

fn run(values: &[f32], f: impl Fn(usize) -> f32) -> (Vec<f32>, f64) {
    let mut out = Vec::with_capacity(values.len());
    let start = Instant::now();
    for i in 0..values.len() {
        out.push(black_box(f(black_box(i))));
    }
    let elapsed = start.elapsed().as_nanos() as f64;
    let per_call = if values.is_empty() {
        0.0
    } else {
        elapsed / values.len() as f64
    };
    (out, per_call)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = BenchConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.samples, 65_536);
        assert_eq!(config.range, 0.0..100.0);
    }

    #[test]
    fn samples_are_deterministic_and_in_range() {
        let config = BenchConfig {
            samples: 1000,
            ..BenchConfig::default()
        };
        let a = sample_values(&config);
        let b = sample_values(&config);
        assert_eq!(a, b);
        assert_eq!(a.len(), 1000);
        assert!(a.iter().all(|v| config.range.contains(v)));
    }

    #[test]
    fn different_seeds_differ() {
        let a = sample_values(&BenchConfig {
            samples: 16,
            ..BenchConfig::default()
        });
        let b = sample_values(&BenchConfig {
            seed: 7,
            samples: 16,
            ..BenchConfig::default()
        });
        assert_ne!(a, b);
    }

    #[test]
    fn rmse_known_values() {
        assert_eq!(rmse(&[], &[]), 0.0);
        assert_eq!(rmse(&[1.0, 2.0], &[1.0, 2.0]), 0.0);
        assert_eq!(rmse(&[0.0, 0.0], &[3.0, -3.0]), 3.0);
    }

    #[test]
    #[should_panic(expected = "different length")]
    fn rmse_rejects_mismatched_lengths() {
        rmse(&[1.0], &[]);
    }

    #[test]
    fn identical_functions_have_zero_error() {
        let values = sample_values(&BenchConfig {
            samples: 256,
            ..BenchConfig::default()
        });
        let acc = measure("sin", &values, cclib_math::fast::sin, f32::sin);
        assert_eq!(acc.name, "sin");
        assert_eq!(acc.rmse, 0.0);
        assert!(acc.fast_ns >= 0.0 && acc.reference_ns >= 0.0);
    }

    #[test]
    fn approximate_atan2_has_small_error() {
        let values = sample_values(&BenchConfig {
            samples: 4096,
            range: 1.0..100.0,
            ..BenchConfig::default()
        });
        let acc = measure_binary("atan2", &values, cclib_math::fast::atan2, f32::atan2);
        assert!(acc.rmse > 0.0);
        assert!(acc.rmse < 0.072);
    }

    #[test]
    fn speedup_and_report_line() {
        let acc = Accuracy {
            name: "rcp".into(),
            fast_ns: 1.0,
            reference_ns: 2.0,
            rmse: 0.0,
        };
        assert_eq!(acc.speedup_percent(), 50.0);
        assert_eq!(
            acc.to_string(),
            "rcp: cclib: 1.00ns - std: 2.00ns (speedup: +50% RMSE: 0.000)"
        );

        let slower = Accuracy {
            fast_ns: 3.0,
            ..acc
        };
        assert_eq!(slower.speedup_percent(), -50.0);
    }
}
