//! Integer theory: gcd, lcm, prime factorization, and divisor enumeration.

use std::collections::BTreeMap;

use crate::error::{MathError, Result};

/// All divisors of an integer, or the marker for 0 which has unboundedly
/// many.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Factors {
    Infinite,
    Finite(Vec<i64>),
}

/// Greatest common divisor by the recursive Euclidean algorithm.
///
/// `gcd(a, 0) = a`, `gcd(0, b) = b`, `gcd(a, b) = gcd(b, a % b)`.
///
/// The sign is not normalized: the result carries the sign of whichever
/// operand survives to the base case, with `%` following the dividend's
/// sign. `gcd(8, -12)` is therefore `-4` while `gcd(-8, 12)` is `4`.
pub fn gcd(x: i64, y: i64) -> i64 {
    if x == 0 {
        y
    } else if y == 0 {
        x
    } else {
        gcd(y, x % y)
    }
}

/// Least common multiple, `|x·y| / gcd(x, y)`.
///
/// Returns 0 when either input is 0. Inherits the sign of [`gcd`], so a
/// negative gcd yields a negative lcm.
pub fn lcm(x: i64, y: i64) -> i64 {
    if x == 0 || y == 0 {
        0
    } else {
        (x * y).abs() / gcd(x, y)
    }
}

/// Prime factors of `n` with multiplicity, ascending.
///
/// Trial division by 2 and 3, then by candidates of the form 6k±1 up to the
/// square root of the remaining value; any leftover greater than 1 is itself
/// prime and is appended last.
pub fn prime_factorization(n: i64) -> Result<Vec<i64>> {
    if n < 1 {
        return Err(MathError::OutOfBounds(format!(
            "prime factorization requires n >= 1 ({n} provided)"
        )));
    }

    let mut remainder = n;
    let mut factors = Vec::new();

    for divisor in [2, 3] {
        while remainder % divisor == 0 {
            factors.push(divisor);
            remainder /= divisor;
        }
    }

    let mut divisor = 5;
    while divisor * divisor <= remainder {
        while remainder % divisor == 0 {
            factors.push(divisor);
            remainder /= divisor;
        }
        divisor += 2;
        while remainder % divisor == 0 {
            factors.push(divisor);
            remainder /= divisor;
        }
        divisor += 4;
    }

    if remainder > 1 {
        factors.push(remainder);
    }

    Ok(factors)
}

/// All divisors of `|x|`, ascending, always including 1.
///
/// Built from the prime factorization: each prime contributes its powers
/// 0..=multiplicity, and the divisors are the products over one choice per
/// prime. `factor(0)` is [`Factors::Infinite`].
pub fn factor(x: i64) -> Factors {
    if x == 0 {
        return Factors::Infinite;
    }

    let mut exponents: BTreeMap<i64, u32> = BTreeMap::new();
    // |x| >= 1, so the factorization cannot fail.
    if let Ok(primes) = prime_factorization(x.abs()) {
        for prime in primes {
            *exponents.entry(prime).or_insert(0) += 1;
        }
    }

    let mut divisors = vec![1];
    for (prime, exponent) in exponents {
        let mut expanded = Vec::with_capacity(divisors.len() * (exponent as usize + 1));
        for &divisor in &divisors {
            let mut power = 1;
            for _ in 0..=exponent {
                expanded.push(divisor * power);
                power *= prime;
            }
        }
        divisors = expanded;
    }
    divisors.sort_unstable();

    Factors::Finite(divisors)
}
