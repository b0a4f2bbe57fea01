//! Closed-form polynomial root finding.
//!
//! Each solver reduces to the one below it when its leading coefficient is
//! zero (linear ← quadratic ← cubic ← quartic), and the higher-degree
//! solvers compose the lower ones: a cubic with one real root deflates into
//! a quadratic for its conjugate pair, and a quartic reduces through a
//! resolvent cubic or a depressed form.

use std::f64::consts::PI;

use crate::complex::Complex;

/// Band around zero within which a cubic discriminant counts as zero.
const ZERO_TOLERANCE: f64 = 1e-12;

/// One root of a polynomial equation.
///
/// `Undefined` marks a slot whose root either does not exist (the leading
/// coefficient was zero) or is complex while complex results were not
/// requested. Root sets keep their full length regardless, so callers can
/// always index by root number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Root {
    Real(f64),
    Complex(Complex),
    Undefined,
}

impl Root {
    pub fn is_real(&self) -> bool {
        matches!(self, Root::Real(_))
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Root::Undefined)
    }

    pub fn as_real(&self) -> Option<f64> {
        match self {
            Root::Real(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_complex(&self) -> Option<Complex> {
        match self {
            Root::Complex(z) => Some(*z),
            _ => None,
        }
    }

    fn shift(self, delta: f64) -> Root {
        match self {
            Root::Real(x) => Root::Real(x + delta),
            Root::Complex(z) => Root::Complex(z + delta),
            Root::Undefined => Root::Undefined,
        }
    }

    fn round_to(self, digits: i32) -> Root {
        let scale = 10f64.powi(digits);
        let round = |x: f64| (x * scale).round() / scale;
        match self {
            Root::Real(x) => Root::Real(round(x)),
            Root::Complex(z) => Root::Complex(Complex::new(round(z.re), round(z.im))),
            Root::Undefined => Root::Undefined,
        }
    }
}

/// Equation solver with optional rounding precision, set at construction and
/// immutable afterwards. Every method is a pure function of its inputs, so a
/// single instance may be shared across threads freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct Solver {
    precision: Option<i32>,
}

impl Solver {
    pub fn new() -> Self {
        Solver { precision: None }
    }

    /// Round every returned root to `digits` decimal digits.
    pub fn with_precision(digits: i32) -> Self {
        Solver {
            precision: Some(digits),
        }
    }

    /// Δ = b² − 4ac.
    pub fn discriminant(&self, a: f64, b: f64, c: f64) -> f64 {
        b * b - 4.0 * a * c
    }

    /// Root of `ax + b = 0`, or `None` when a = 0 and no root exists.
    pub fn linear(&self, a: f64, b: f64) -> Option<f64> {
        if a == 0.0 {
            None
        } else {
            Some(-b / a)
        }
    }

    /// Roots of `ax² + bx + c = 0`.
    ///
    /// Two roots `(−b ∓ √Δ)/2a` when Δ ≥ 0. When Δ < 0 the roots are the
    /// conjugate pair `−b/2a ∓ i·√(−Δ)/2a`, returned as [`Root::Complex`]
    /// if `want_complex` and as two [`Root::Undefined`] slots otherwise.
    /// With a = 0 the equation degenerates to linear form and a single root
    /// is returned.
    pub fn quadratic(&self, a: f64, b: f64, c: f64, want_complex: bool) -> Vec<Root> {
        if a == 0.0 {
            let root = match self.linear(b, c) {
                Some(x) => Root::Real(x),
                None => Root::Undefined,
            };
            return self.finish(vec![root]);
        }

        let discriminant = self.discriminant(a, b, c);
        let roots = if discriminant < 0.0 {
            if want_complex {
                let re = -b / (2.0 * a);
                let im = (-discriminant).sqrt() / (2.0 * a);
                vec![
                    Root::Complex(Complex::new(re, -im)),
                    Root::Complex(Complex::new(re, im)),
                ]
            } else {
                vec![Root::Undefined, Root::Undefined]
            }
        } else {
            let sqrt_d = discriminant.sqrt();
            vec![
                Root::Real((-b - sqrt_d) / (2.0 * a)),
                Root::Real((-b + sqrt_d) / (2.0 * a)),
            ]
        };

        self.finish(roots)
    }

    /// Roots of `a₃z³ + a₂z² + a₁z + a₀ = 0` by the Cardano/Viète formulas.
    ///
    /// Degenerates to [`Solver::quadratic`] when a₃ = 0. Otherwise the
    /// equation is normalized monic and the discriminant Δ = Q³ + R² picks
    /// the branch:
    /// - Δ < 0: three distinct real roots by the trigonometric method.
    /// - |Δ| within [`ZERO_TOLERANCE`]: repeated real roots, S = T = ∛R.
    /// - Δ > 0: one real root; the conjugate pair comes from deflating into
    ///   the remaining quadratic factor.
    pub fn cubic(&self, a3: f64, a2: f64, a1: f64, a0: f64, want_complex: bool) -> Vec<Root> {
        if a3 == 0.0 {
            return self.quadratic(a2, a1, a0, want_complex);
        }

        let b = a2 / a3;
        let c = a1 / a3;
        let d = a0 / a3;

        let q = (3.0 * c - b * b) / 9.0;
        let r = (9.0 * b * c - 27.0 * d - 2.0 * b * b * b) / 54.0;
        let discriminant = q * q * q + r * r;

        if discriminant < -ZERO_TOLERANCE {
            // Three distinct real roots (Viète).
            let theta = (r / (-q).powi(3).sqrt()).acos();
            let magnitude = 2.0 * (-q).sqrt();
            let roots = (0..3)
                .map(|k| {
                    let angle = (theta + 2.0 * PI * k as f64) / 3.0;
                    Root::Real(magnitude * angle.cos() - b / 3.0)
                })
                .collect();
            return self.finish(roots);
        }

        let sqrt_d = discriminant.max(0.0).sqrt();
        let s = (r + sqrt_d).cbrt();
        let t = (r - sqrt_d).cbrt();

        if discriminant <= ZERO_TOLERANCE {
            // Repeated real roots: a double root and one other.
            let double = -b / 3.0 - (s + t) / 2.0;
            let single = s + t - b / 3.0;
            return self.finish(vec![
                Root::Real(double),
                Root::Real(single),
                Root::Real(double),
            ]);
        }

        // One real root, two complex conjugates.
        let z1 = s + t - b / 3.0;
        let mut roots = vec![Root::Real(z1)];
        if want_complex {
            // Deflate by the known root: z² + (b + z₁)z + (c + (b + z₁)z₁).
            let quad_b = b + z1;
            let quad_c = c + quad_b * z1;
            roots.extend(self.quadratic(1.0, quad_b, quad_c, true));
        } else {
            roots.extend([Root::Undefined, Root::Undefined]);
        }
        self.finish(roots)
    }

    /// Roots of `a₄z⁴ + a₃z³ + a₂z² + a₁z + a₀ = 0`.
    ///
    /// Degenerates to [`Solver::cubic`] when a₄ = 0. After normalizing
    /// monic, the special forms are handled first: a zero constant term
    /// factors out the root 0, a biquadratic substitutes y = z², and a
    /// depressed quartic goes through its resolvent cubic. The general case
    /// depresses via z = y − a₃/4, recurses, and shifts the roots back.
    pub fn quartic(
        &self,
        a4: f64,
        a3: f64,
        a2: f64,
        a1: f64,
        a0: f64,
        want_complex: bool,
    ) -> Vec<Root> {
        if a4 == 0.0 {
            return self.cubic(a3, a2, a1, a0, want_complex);
        }

        let b = a3 / a4;
        let c = a2 / a4;
        let d = a1 / a4;
        let e = a0 / a4;

        if e == 0.0 {
            // Zero is a root; the rest come from the remaining cubic.
            let mut roots = vec![Root::Real(0.0)];
            roots.extend(self.cubic(1.0, b, c, d, want_complex));
            return self.finish(roots);
        }

        if b == 0.0 && d == 0.0 {
            return self.finish(self.biquadratic(c, e, want_complex));
        }

        if b == 0.0 {
            return self.finish(self.depressed_quartic(c, d, e, want_complex));
        }

        // General quartic: depress via z = y − b/4, then shift back.
        let p = c - 3.0 * b * b / 8.0;
        let q = d + b * b * b / 8.0 - b * c / 2.0;
        let r = e - 3.0 * b.powi(4) / 256.0 + b * b * c / 16.0 - b * d / 4.0;

        let roots = self
            .quartic(1.0, 0.0, p, q, r, want_complex)
            .into_iter()
            .map(|root| root.shift(-b / 4.0))
            .collect();
        self.finish(roots)
    }

    /// Even-powers-only quartic `z⁴ + cz² + e = 0`: solve the quadratic in
    /// y = z², then expand each y-root into its ± square-root pair. The
    /// real-and-larger y-root contributes its pair first.
    fn biquadratic(&self, c: f64, e: f64, want_complex: bool) -> Vec<Root> {
        let mut y_roots = self.quadratic(1.0, c, e, true);
        if let (Root::Real(first), Root::Real(second)) = (y_roots[0], y_roots[1]) {
            if first < second {
                y_roots.swap(0, 1);
            }
        }

        let mut roots = Vec::with_capacity(4);
        for y in y_roots {
            match y {
                Root::Real(y) if y >= 0.0 => {
                    roots.push(Root::Real(y.sqrt()));
                    roots.push(Root::Real(-y.sqrt()));
                }
                Root::Real(y) => {
                    if want_complex {
                        let z = Complex::new(0.0, (-y).sqrt());
                        roots.push(Root::Complex(z));
                        roots.push(Root::Complex(-z));
                    } else {
                        roots.extend([Root::Undefined, Root::Undefined]);
                    }
                }
                Root::Complex(z) => {
                    if want_complex {
                        let sqrt = z.sqrt();
                        roots.push(Root::Complex(sqrt));
                        roots.push(Root::Complex(-sqrt));
                    } else {
                        roots.extend([Root::Undefined, Root::Undefined]);
                    }
                }
                Root::Undefined => roots.extend([Root::Undefined, Root::Undefined]),
            }
        }
        roots
    }

    /// Depressed quartic `y⁴ + py² + qy + r = 0` via its resolvent cubic
    /// `8m³ + 8pm² + (2p² − 8r)m − q² = 0`, whose first root m is always
    /// real. The four roots split across the two quadratics
    /// `z² ± √(2m)z + (p/2 + m ∓ q/(2√(2m)))`; the pair with the larger
    /// discriminant comes first.
    fn depressed_quartic(&self, p: f64, q: f64, r: f64, want_complex: bool) -> Vec<Root> {
        let resolvent = self.cubic(8.0, 8.0 * p, 2.0 * p * p - 8.0 * r, -(q * q), want_complex);
        let Some(Root::Real(m)) = resolvent.first().copied() else {
            return vec![Root::Undefined; 4];
        };

        let s = (2.0 * m).sqrt();
        let c1 = p / 2.0 + m - q / (2.0 * s);
        let c2 = p / 2.0 + m + q / (2.0 * s);

        let roots1 = self.quadratic(1.0, s, c1, want_complex);
        let roots2 = self.quadratic(1.0, -s, c2, want_complex);
        let discriminant1 = self.discriminant(1.0, s, c1);
        let discriminant2 = self.discriminant(1.0, -s, c2);

        let (first, second) = if discriminant1 > discriminant2 {
            (roots1, roots2)
        } else {
            (roots2, roots1)
        };
        first.into_iter().chain(second).collect()
    }

    fn finish(&self, roots: Vec<Root>) -> Vec<Root> {
        match self.precision {
            Some(digits) => roots.into_iter().map(|r| r.round_to(digits)).collect(),
            None => roots,
        }
    }
}
