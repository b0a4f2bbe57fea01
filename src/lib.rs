//! Closed-form polynomial equation solving with the arithmetic,
//! integer-theory, and complex-number primitives the solvers depend on.

pub mod arith;
pub mod complex;
pub mod error;
pub mod format;
pub mod integer;
pub mod solver;
pub mod timing;

pub use arith::OrderPolicy;
pub use complex::Complex;
pub use error::{MathError, Result};
pub use format::{pretty_complex, pretty_root, pretty_roots, Style};
pub use integer::{factor, gcd, lcm, prime_factorization, Factors};
pub use solver::{Root, Solver};
pub use timing::{measure, ComplexityClass, Measurement};
