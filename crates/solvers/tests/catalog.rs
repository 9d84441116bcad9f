//! Sweeps the benchmark function catalog through every solver.

use approx::assert_relative_eq;
use rand::{SeedableRng, rngs::StdRng};

use scalaropt_core::Expr;
use scalaropt_solvers::{
    OptimizationResult,
    interval::{Event, bisection, fibonacci, golden_ratio},
    point::{gradient_descent, newton, random_search},
};

const CATALOG: [(&str, &str); 21] = [
    ("Quadratic 1", "x**2 - 8*x + 8"),
    ("Quadratic 2", "x**2 + 4*x + 4"),
    ("Quadratic 3", "3*x**2 - 3*x + 1"),
    ("Quadratic 4", "x**2 + 2*x - 1"),
    ("Quadratic 5", "0.5*x**2 - 5*x + 12"),
    ("Cubic 1", "x**3 - 3*x - 1"),
    ("Cubic 2", "-x**3 + 6*x**2 - 9*x + 4"),
    ("Cubic 3", "2*x**3 - 6*x**2 + 4*x"),
    ("Cubic 4", "x**3 + x**2 - 4*x - 4"),
    ("Cubic 5", "4*x**3 - 12*x**2 + 9*x - 2"),
    ("Quartic 1", "x**4 - 4*x**3 + 6*x**2 - 4*x + 1"),
    ("Quartic 2", "-2*x**4 + 8*x**3 - 12*x**2 + 8*x - 2"),
    ("Quartic 3", "0.5*x**4 - x**3 - 3.5*x**2 + 2*x + 10"),
    ("Quartic 4", "x**4 + 2*x**3 - 13*x**2 + 14*x - 24"),
    ("Quartic 5", "3*x**4 - 6*x**3 + 3*x**2 - 6*x + 2"),
    ("Exponential 1", "exp(x**2)"),
    ("Exponential 2", "2**x - x**2"),
    ("Exponential 3", "2**x * 9 * x**2"),
    ("Logarithmic 1", "log(exp(x**2) + x + 1)"),
    ("Logarithmic 2", "x*log(x) - x**0.5"),
    ("Logarithmic 3", "x*log(x) + x**2"),
];

const INTERVALS: [[f64; 2]; 3] = [[-2.0, 2.0], [-4.0, 4.0], [-8.0, 8.0]];
const STARTS: [f64; 3] = [0.0, 1.0, 2.0];
const PRECISIONS: [f64; 5] = [1e-2, 1e-4, 1e-6, 1e-8, 1e-10];
const MAX_ITERS: usize = 1000;

fn catalog() -> Vec<(&'static str, Expr)> {
    CATALOG
        .iter()
        .map(|&(name, text)| {
            let expr = text
                .parse::<Expr>()
                .unwrap_or_else(|err| panic!("{name}: {err}"));
            (name, expr)
        })
        .collect()
}

fn assert_estimate_is_finite(name: &str, result: &OptimizationResult) {
    if result.is_success() {
        let x = result.x_optimal().unwrap();
        let f = result.f_optimal().unwrap();
        assert!(x.is_finite() && f.is_finite(), "{name}: {result:?}");
    }
}

#[test]
fn catalog_parses() {
    assert_eq!(catalog().len(), 21);
}

#[test]
fn interval_successes_meet_width_tolerance() {
    for (name, f) in catalog() {
        for bracket in INTERVALS {
            for precision in PRECISIONS {
                let golden = golden_ratio::Config::new(precision, 100).unwrap();
                let mut width = f64::INFINITY;
                let observer = |event: &Event| {
                    width = event.width();
                    None
                };
                let result = golden_ratio::minimize(&f, bracket, &golden, observer).unwrap();
                assert_estimate_is_finite(name, &result);
                if result.is_success() {
                    assert!(width <= precision, "golden {name} {bracket:?}: {width}");
                }

                let bisect = bisection::Config::new(0.1, precision, 200).unwrap();
                let mut width = f64::INFINITY;
                let observer = |event: &Event| {
                    width = event.width();
                    None
                };
                let result = bisection::minimize(&f, bracket, &bisect, observer).unwrap();
                assert_estimate_is_finite(name, &result);
                if result.is_success() {
                    assert!(width <= precision, "bisection {name} {bracket:?}: {width}");
                }

                // A table-exhausted run may succeed with a wider bracket.
                let fib = fibonacci::Config::new(precision, 100).unwrap();
                let mut width = f64::INFINITY;
                let observer = |event: &Event| {
                    width = event.width();
                    None
                };
                let result = fibonacci::minimize(&f, bracket, &fib, observer).unwrap();
                assert_estimate_is_finite(name, &result);
                if result.is_success() && result.iterations() < fib.max_iters() {
                    assert!(width <= precision, "fibonacci {name} {bracket:?}: {width}");
                }
            }
        }
    }
}

#[test]
fn point_methods_classify_every_run() {
    for (name, f) in catalog() {
        let slope = f.differentiate();
        for x0 in STARTS {
            for precision in PRECISIONS {
                let config = newton::Config::new(precision, MAX_ITERS).unwrap();
                let result = newton::minimize_unobserved(&f, x0, &config).unwrap();
                assert_estimate_is_finite(name, &result);
                assert!(result.iterations() <= MAX_ITERS);

                let config =
                    gradient_descent::Config::new(MAX_ITERS, precision, 0.01, 0.5).unwrap();
                let result = gradient_descent::minimize_unobserved(&f, x0, &config).unwrap();
                assert_estimate_is_finite(name, &result);
                if let Some(x) = result.x_optimal()
                    && result.is_success()
                {
                    let g = slope.eval(x).unwrap();
                    assert!(g.abs() < precision, "gradient {name} from {x0}: f'({x}) = {g}");
                }

                let config =
                    random_search::Config::new(precision, 1.0, MAX_ITERS, false).unwrap();
                let mut rng = StdRng::seed_from_u64(7);
                let result =
                    random_search::minimize_unobserved(&f, x0, &config, &mut rng).unwrap();
                assert_estimate_is_finite(name, &result);
                if let (Some(best), Ok(start)) = (result.f_optimal(), f.eval(x0)) {
                    assert!(best <= start, "random {name} from {x0}: {best} > {start}");
                }
            }
        }
    }
}

#[test]
fn deterministic_methods_are_idempotent() {
    for (name, f) in catalog() {
        for bracket in INTERVALS {
            let first = golden_ratio::minimize_unobserved(&f, bracket, &Default::default());
            let second = golden_ratio::minimize_unobserved(&f, bracket, &Default::default());
            assert_eq!(first, second, "golden {name}");

            let first = fibonacci::minimize_unobserved(&f, bracket, &Default::default());
            let second = fibonacci::minimize_unobserved(&f, bracket, &Default::default());
            assert_eq!(first, second, "fibonacci {name}");

            let first = bisection::minimize_unobserved(&f, bracket, &Default::default());
            let second = bisection::minimize_unobserved(&f, bracket, &Default::default());
            assert_eq!(first, second, "bisection {name}");
        }

        for x0 in STARTS {
            let first = newton::minimize_unobserved(&f, x0, &Default::default());
            let second = newton::minimize_unobserved(&f, x0, &Default::default());
            assert_eq!(first, second, "newton {name}");

            let first = gradient_descent::minimize_unobserved(&f, x0, &Default::default());
            let second = gradient_descent::minimize_unobserved(&f, x0, &Default::default());
            assert_eq!(first, second, "gradient {name}");
        }
    }
}

#[test]
fn seeded_random_search_is_reproducible() {
    for (name, f) in catalog() {
        let config = random_search::Config::default();
        let mut rng = StdRng::seed_from_u64(3);
        let first = random_search::minimize_unobserved(&f, 1.0, &config, &mut rng);
        let mut rng = StdRng::seed_from_u64(3);
        let second = random_search::minimize_unobserved(&f, 1.0, &config, &mut rng);
        assert_eq!(first, second, "random {name}");
    }
}

#[test]
fn quadratic_minima_are_found() {
    let expected = [4.0, -2.0, 0.5, -1.0, 5.0];

    for ((name, f), x_min) in catalog().into_iter().zip(expected) {
        let bracket = [-8.0, 8.0];
        let tight = 1e-6;

        let golden = golden_ratio::Config::new(tight, 100).unwrap();
        let result = golden_ratio::minimize_unobserved(&f, bracket, &golden).unwrap();
        assert_relative_eq!(result.x_optimal().unwrap(), x_min, epsilon = 1e-4);

        let fib = fibonacci::Config::new(tight, 100).unwrap();
        let result = fibonacci::minimize_unobserved(&f, bracket, &fib).unwrap();
        assert_relative_eq!(result.x_optimal().unwrap(), x_min, epsilon = 1e-4);

        let bisect = bisection::Config::new(0.1, tight, 200).unwrap();
        let result = bisection::minimize_unobserved(&f, bracket, &bisect).unwrap();
        assert_relative_eq!(result.x_optimal().unwrap(), x_min, epsilon = 1e-4);

        let result = newton::minimize_unobserved(&f, 0.0, &Default::default()).unwrap();
        assert!(result.is_success(), "newton {name}");
        assert_relative_eq!(result.x_optimal().unwrap(), x_min, epsilon = 1e-9);

        let result = gradient_descent::minimize_unobserved(&f, 0.0, &Default::default()).unwrap();
        assert!(result.is_success(), "gradient {name}");
        assert_relative_eq!(result.x_optimal().unwrap(), x_min, epsilon = 1e-5);
    }
}
