//! A minimal complex-number value type covering the operations the
//! closed-form solvers need.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{One, Zero};

use crate::error::{MathError, Result};
use crate::format;

/// Floating-point range within which two components are considered equal.
pub const EPSILON: f64 = 1e-6;

/// An immutable complex number `re + im·i`.
///
/// Every operation constructs a fresh value; nothing mutates in place.
/// Presentation concerns (rounding digits, typeset style) live in
/// [`crate::format`], not in the value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub fn new(re: f64, im: f64) -> Self {
        Complex { re, im }
    }

    pub fn from_real(re: f64) -> Self {
        Complex { re, im: 0.0 }
    }

    /// The complex conjugate `re - im·i`.
    pub fn conjugate(&self) -> Complex {
        Complex::new(self.re, -self.im)
    }

    /// The modulus `√(re² + im²)`.
    pub fn magnitude(&self) -> f64 {
        self.re.hypot(self.im)
    }

    /// The phase angle with the positive real axis, `atan2(im, re)`.
    pub fn argument(&self) -> f64 {
        self.im.atan2(self.re)
    }

    /// `(magnitude, argument)`.
    pub fn polar_form(&self) -> (f64, f64) {
        (self.magnitude(), self.argument())
    }

    pub fn from_polar(magnitude: f64, argument: f64) -> Complex {
        Complex::new(magnitude * argument.cos(), magnitude * argument.sin())
    }

    /// The two square roots `±(γ + δi)` by the half-angle formula, where
    /// γ = √((re + |z|)/2) and δ = sgn(im)·√((−re + |z|)/2), treating
    /// sgn(0) as positive. The principal root comes first.
    pub fn roots(&self) -> [Complex; 2] {
        let sgn = if self.im < 0.0 { -1.0 } else { 1.0 };
        let gamma = ((self.re + self.magnitude()) / 2.0).sqrt();
        let delta = sgn * ((-self.re + self.magnitude()) / 2.0).sqrt();
        [Complex::new(gamma, delta), Complex::new(-gamma, -delta)]
    }

    /// The principal square root.
    pub fn sqrt(&self) -> Complex {
        self.roots()[0]
    }

    /// The reciprocal, `conjugate / |z|²`. Fails for exactly `0 + 0i`.
    pub fn inverse(&self) -> Result<Complex> {
        if self.is_zero() {
            return Err(MathError::BadData(
                "cannot take inverse of 0 + 0i".to_string(),
            ));
        }
        let norm = self.re * self.re + self.im * self.im;
        Ok(self.conjugate() / norm)
    }

    /// Division via multiplication by the inverse of the divisor. Fails when
    /// the divisor is zero, whether given as a scalar or a complex value.
    pub fn divide(&self, divisor: impl Into<Complex>) -> Result<Complex> {
        let inverse = divisor.into().inverse()?;
        Ok(*self * inverse)
    }

    /// `e^z = e^re·cos(im) + i·e^re·sin(im)`.
    pub fn exp(&self) -> Complex {
        let scale = self.re.exp();
        Complex::new(scale * self.im.cos(), scale * self.im.sin())
    }

    /// Raise to a real power via polar form.
    pub fn powf(&self, exponent: f64) -> Complex {
        let rotated = Complex::new(0.0, exponent * self.argument()).exp();
        rotated * self.magnitude().powf(exponent)
    }

    /// Raise to a complex power via the generalized polar-form identity.
    pub fn pow(&self, exponent: Complex) -> Complex {
        let (r, theta) = self.polar_form();
        let scale = r.powf(exponent.re) * (-theta * exponent.im).exp();
        // log r diverges at the origin; the angle term collapses to 0 there.
        let angle = if r == 0.0 {
            0.0
        } else {
            exponent.im * r.ln() + exponent.re * theta
        };
        Complex::new(scale * angle.cos(), scale * angle.sin())
    }

    /// Component-wise equality within [`EPSILON`], since roots come out of
    /// floating-point trigonometric and radical formulas.
    pub fn equals(&self, other: &Complex) -> bool {
        (self.re - other.re).abs() < EPSILON && (self.im - other.im).abs() < EPSILON
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Complex::from_real(re)
    }
}

impl Add for Complex {
    type Output = Complex;
    fn add(self, rhs: Complex) -> Complex {
        Complex::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Add<f64> for Complex {
    type Output = Complex;
    fn add(self, rhs: f64) -> Complex {
        Complex::new(self.re + rhs, self.im)
    }
}

impl Sub for Complex {
    type Output = Complex;
    fn sub(self, rhs: Complex) -> Complex {
        Complex::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Sub<f64> for Complex {
    type Output = Complex;
    fn sub(self, rhs: f64) -> Complex {
        Complex::new(self.re - rhs, self.im)
    }
}

impl Mul for Complex {
    type Output = Complex;
    fn mul(self, rhs: Complex) -> Complex {
        Complex::new(
            self.re * rhs.re - self.im * rhs.im,
            self.im * rhs.re + self.re * rhs.im,
        )
    }
}

impl Mul<f64> for Complex {
    type Output = Complex;
    fn mul(self, rhs: f64) -> Complex {
        Complex::new(self.re * rhs, self.im * rhs)
    }
}

impl Div<f64> for Complex {
    type Output = Complex;
    fn div(self, rhs: f64) -> Complex {
        Complex::new(self.re / rhs, self.im / rhs)
    }
}

impl Neg for Complex {
    type Output = Complex;
    fn neg(self) -> Complex {
        Complex::new(-self.re, -self.im)
    }
}

impl Zero for Complex {
    fn zero() -> Self {
        Complex::new(0.0, 0.0)
    }

    fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }
}

impl One for Complex {
    fn one() -> Self {
        Complex::new(1.0, 0.0)
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format::pretty_complex(self, None, format::Style::Plain))
    }
}
