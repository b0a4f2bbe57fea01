//! Wall-clock instrumentation for display purposes.
//!
//! [`measure`] wraps an operation closure, keeping the solvers themselves
//! free of timing state. The complexity bucket is a heuristic on elapsed
//! time and input size, not an asymptotic analysis, and never feeds back
//! into numeric results.

use std::fmt;
use std::time::{Duration, Instant};

const INPUT_SIZE_THRESHOLD: usize = 1000;

/// Coarse algorithmic-complexity bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplexityClass {
    Constant,
    Logarithmic,
    Linear,
    Linearithmic,
    Quadratic,
    Polynomial,
}

impl fmt::Display for ComplexityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ComplexityClass::Constant => "O(1)",
            ComplexityClass::Logarithmic => "O(log n)",
            ComplexityClass::Linear => "O(n)",
            ComplexityClass::Linearithmic => "O(n log n)",
            ComplexityClass::Quadratic => "O(n²)",
            ComplexityClass::Polynomial => "O(nᵏ), k > 2",
        };
        f.write_str(label)
    }
}

/// One timed operation: elapsed wall-clock time and the caller-declared
/// input size.
#[derive(Debug, Clone, Copy)]
pub struct Measurement {
    pub elapsed: Duration,
    pub input_size: usize,
}

impl Measurement {
    /// Classify by elapsed milliseconds, with an input-size cutoff for the
    /// larger buckets.
    pub fn complexity_class(&self) -> ComplexityClass {
        let ms = self.elapsed.as_secs_f64() * 1e3;
        let small = self.input_size < INPUT_SIZE_THRESHOLD;

        if ms < 0.001 {
            ComplexityClass::Constant
        } else if ms < 0.01 {
            ComplexityClass::Logarithmic
        } else if ms < 1.0 && small {
            ComplexityClass::Linear
        } else if ms < 10.0 && small {
            ComplexityClass::Linearithmic
        } else if ms < 60.0 && small {
            ComplexityClass::Quadratic
        } else {
            ComplexityClass::Polynomial
        }
    }
}

/// Run `op`, returning its result together with a [`Measurement`].
pub fn measure<T>(input_size: usize, op: impl FnOnce() -> T) -> (T, Measurement) {
    let start = Instant::now();
    let value = op();
    let measurement = Measurement {
        elapsed: start.elapsed(),
        input_size,
    };
    (value, measurement)
}
