//! Arithmetic primitives: variadic reductions, powers, roots, logarithms,
//! bounded sums and products, and floored modulo.

use num_integer::Integer;

/// Evaluation order for the variadic reductions.
///
/// `Sequential` folds strictly left to right. `LargestFirst` puts the larger
/// operand on the left at every step, so `subtract` never goes negative and
/// `divide` never inverts a quotient mid-fold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderPolicy {
    #[default]
    Sequential,
    LargestFirst,
}

fn reduce(init: f64, operands: &[f64], policy: OrderPolicy, op: fn(f64, f64) -> f64) -> f64 {
    operands.iter().fold(init, |acc, &x| match policy {
        OrderPolicy::Sequential => op(acc, x),
        OrderPolicy::LargestFirst => {
            if acc > x {
                op(acc, x)
            } else {
                op(x, acc)
            }
        }
    })
}

/// Sum of the addends.
pub fn add(addends: &[f64]) -> f64 {
    addends.iter().sum()
}

/// Minuend reduced by each subtrahend in turn.
pub fn subtract(minuend: f64, subtrahends: &[f64], policy: OrderPolicy) -> f64 {
    reduce(minuend, subtrahends, policy, |a, b| a - b)
}

pub fn multiply(multiplier: f64, multiplicands: &[f64], policy: OrderPolicy) -> f64 {
    reduce(multiplier, multiplicands, policy, |a, b| a * b)
}

pub fn divide(dividend: f64, divisors: &[f64], policy: OrderPolicy) -> f64 {
    reduce(dividend, divisors, policy, |a, b| a / b)
}

pub fn power(base: f64, exponent: f64) -> f64 {
    base.powf(exponent)
}

/// Degree-th root of the radicand, `radicand^(1/degree)`.
pub fn root(radicand: f64, degree: f64) -> f64 {
    radicand.powf(1.0 / degree)
}

/// Logarithm of `anti_log` in the given base.
pub fn log(anti_log: f64, base: f64) -> f64 {
    anti_log.log(base)
}

/// Σ term·i for i = lower..=upper.
pub fn summation(upper: f64, term: f64, lower: f64) -> f64 {
    let mut sum = 0.0;
    let mut i = lower;
    while i <= upper {
        sum += term * i;
        i += 1.0;
    }
    sum
}

/// Π term·i for i = lower..=upper.
pub fn product(upper: f64, term: f64, lower: f64) -> f64 {
    let mut product = 1.0;
    let mut i = lower;
    while i <= upper {
        product *= term * i;
        i += 1.0;
    }
    product
}

/// Floored modulo: the result has the sign of the divisor, unlike the `%`
/// remainder operator. `n == 0` returns `a` unchanged.
pub fn modulo(a: i64, n: i64) -> i64 {
    if n == 0 {
        a
    } else {
        a.mod_floor(&n)
    }
}
