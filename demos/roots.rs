use polysolve::{measure, pretty_roots, Solver, Style};

fn main() {
    let solver = Solver::with_precision(6);

    let quadratic = solver.quadratic(1.0, -3.0, 2.0, true);
    println!("x² - 3x + 2 = 0: {}", pretty_roots(&quadratic, None, Style::Plain));

    let complex = solver.quadratic(1.0, 0.0, 1.0, true);
    println!("x² + 1 = 0:      {}", pretty_roots(&complex, None, Style::Plain));

    let cubic = solver.cubic(1.0, -6.0, 11.0, -6.0, true);
    println!("x³ - 6x² + 11x - 6 = 0: {}", pretty_roots(&cubic, None, Style::Plain));

    let (quartic, measurement) = measure(5, || {
        solver.quartic(1.0, -10.0, 35.0, -50.0, 24.0, true)
    });
    println!(
        "x⁴ - 10x³ + 35x² - 50x + 24 = 0: {} ({:?}, {})",
        pretty_roots(&quartic, None, Style::Plain),
        measurement.elapsed,
        measurement.complexity_class()
    );
}
