//! Formatting helpers for rendering complex numbers and root sets.

use crate::complex::Complex;
use crate::solver::Root;

/// Rendering style; `Typeset` writes the imaginary unit as the dotless 𝚤.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    #[default]
    Plain,
    Typeset,
}

impl Style {
    fn unit(&self) -> &'static str {
        match self {
            Style::Plain => "i",
            Style::Typeset => "𝚤",
        }
    }
}

fn number(x: f64, precision: Option<i32>) -> String {
    match precision {
        Some(digits) => format!("{:.*}", digits.max(0) as usize, x),
        None => format!("{x}"),
    }
}

/// `a + bi` with the usual shortenings: `0`, `a`, `bi`, and `a - |b|i` for
/// a negative imaginary part.
pub fn pretty_complex(z: &Complex, precision: Option<i32>, style: Style) -> String {
    let unit = style.unit();
    if z.re == 0.0 && z.im == 0.0 {
        "0".to_string()
    } else if z.re == 0.0 {
        format!("{}{unit}", number(z.im, precision))
    } else if z.im == 0.0 {
        number(z.re, precision)
    } else if z.im > 0.0 {
        format!("{} + {}{unit}", number(z.re, precision), number(z.im, precision))
    } else {
        format!(
            "{} - {}{unit}",
            number(z.re, precision),
            number(z.im.abs(), precision)
        )
    }
}

pub fn pretty_root(root: &Root, precision: Option<i32>, style: Style) -> String {
    match root {
        Root::Real(x) => number(*x, precision),
        Root::Complex(z) => pretty_complex(z, precision, style),
        Root::Undefined => "undefined".to_string(),
    }
}

/// Comma-separated rendering of a whole root set.
pub fn pretty_roots(roots: &[Root], precision: Option<i32>, style: Style) -> String {
    roots
        .iter()
        .map(|root| pretty_root(root, precision, style))
        .collect::<Vec<_>>()
        .join(", ")
}
