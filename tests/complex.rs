use std::f64::consts::{E, PI};

use polysolve::Complex;

fn assert_close(z: Complex, re: f64, im: f64) {
    let expected = Complex::new(re, im);
    assert!(z.equals(&expected), "{z:?} != {expected:?}");
}

#[test]
fn addition_and_subtraction() {
    let a = Complex::new(1.0, 2.0);
    let b = Complex::new(3.0, -4.0);
    assert_close(a + b, 4.0, -2.0);
    assert_close(a - b, -2.0, 6.0);
    assert_close(a + 2.5, 3.5, 2.0);
    assert_close(a - 0.5, 0.5, 2.0);
}

#[test]
fn multiplication_rectangular_rule() {
    // (1 + 2i)(3 + 4i) = -5 + 10i
    let product = Complex::new(1.0, 2.0) * Complex::new(3.0, 4.0);
    assert_close(product, -5.0, 10.0);
    assert_close(Complex::new(1.0, 2.0) * 3.0, 3.0, 6.0);
}

#[test]
fn imaginary_unit_squares_to_minus_one() {
    let i = Complex::new(0.0, 1.0);
    assert_close(i * i, -1.0, 0.0);
}

#[test]
fn division_via_inverse() {
    // (1 + i)/(1 - i) = i
    let quotient = Complex::new(1.0, 1.0)
        .divide(Complex::new(1.0, -1.0))
        .unwrap();
    assert_close(quotient, 0.0, 1.0);
}

#[test]
fn division_by_zero_is_an_error() {
    assert!(Complex::new(1.0, 1.0).divide(Complex::new(0.0, 0.0)).is_err());
    assert!(Complex::new(1.0, 1.0).divide(0.0).is_err());
}

#[test]
fn inverse_of_zero_is_an_error() {
    assert!(Complex::new(0.0, 0.0).inverse().is_err());
}

#[test]
fn inverse_times_self_is_one() {
    let z = Complex::new(3.0, -2.0);
    assert_close(z * z.inverse().unwrap(), 1.0, 0.0);
}

#[test]
fn magnitude_of_three_four_is_five() {
    assert_eq!(Complex::new(3.0, 4.0).magnitude(), 5.0);
}

#[test]
fn argument_quadrants() {
    assert!((Complex::new(0.0, 1.0).argument() - PI / 2.0).abs() < 1e-12);
    assert!((Complex::new(-1.0, 0.0).argument() - PI).abs() < 1e-12);
}

#[test]
fn conjugate_is_an_involution() {
    let z = Complex::new(2.5, -7.25);
    assert!(z.conjugate().conjugate().equals(&z));
}

#[test]
fn sqrt_of_negative_real_is_pure_imaginary() {
    assert_close(Complex::new(-4.0, 0.0).sqrt(), 0.0, 2.0);
}

#[test]
fn sqrt_squares_back() {
    let z = Complex::new(3.0, 4.0);
    let root = z.sqrt();
    assert!((root * root).equals(&z));
}

#[test]
fn roots_are_negations_of_each_other() {
    let [r1, r2] = Complex::new(5.0, -12.0).roots();
    assert!((-r1).equals(&r2));
}

#[test]
fn sqrt_imaginary_sign_follows_input() {
    assert!(Complex::new(1.0, 4.0).sqrt().im > 0.0);
    assert!(Complex::new(1.0, -4.0).sqrt().im < 0.0);
}

#[test]
fn exp_of_i_pi_is_minus_one() {
    assert_close(Complex::new(0.0, PI).exp(), -1.0, 0.0);
}

#[test]
fn exp_of_one_is_e() {
    assert_close(Complex::new(1.0, 0.0).exp(), E, 0.0);
}

#[test]
fn real_power_squares() {
    assert_close(Complex::new(0.0, 1.0).powf(2.0), -1.0, 0.0);
    assert_close(Complex::new(1.0, 1.0).powf(2.0), 0.0, 2.0);
}

#[test]
fn complex_power_i_to_the_i() {
    let i = Complex::new(0.0, 1.0);
    assert_close(i.pow(i), (-PI / 2.0).exp(), 0.0);
}

#[test]
fn polar_round_trip() {
    let z = Complex::new(-3.0, 4.0);
    let (magnitude, argument) = z.polar_form();
    assert!(Complex::from_polar(magnitude, argument).equals(&z));
}

#[test]
fn equality_is_epsilon_based() {
    let z = Complex::new(1.0, 1.0);
    assert!(z.equals(&Complex::new(1.0 + 1e-9, 1.0 - 1e-9)));
    assert!(!z.equals(&Complex::new(1.0 + 1e-3, 1.0)));
}

#[test]
fn display_shapes() {
    assert_eq!(Complex::new(0.0, 0.0).to_string(), "0");
    assert_eq!(Complex::new(3.0, 0.0).to_string(), "3");
    assert_eq!(Complex::new(0.0, 2.0).to_string(), "2i");
    assert_eq!(Complex::new(1.0, 2.0).to_string(), "1 + 2i");
    assert_eq!(Complex::new(1.0, -2.0).to_string(), "1 - 2i");
}
