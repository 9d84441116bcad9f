use approx::assert_relative_eq;
use rand::{SeedableRng, rngs::StdRng};

use scalaropt_core::{Expr, Objective};

use crate::{Action, Error, FailureReason, Status};

use super::{Config, ConfigError, Event, minimize, minimize_unobserved};

fn seeded() -> StdRng {
    StdRng::seed_from_u64(42)
}

#[test]
fn approaches_minimum_of_shifted_square() {
    let f = Expr::parse("(x - 3)^2").unwrap();
    let result = minimize_unobserved(&f, 2.0, &Config::default(), &mut seeded()).unwrap();

    assert!(result.x_optimal().is_some());
    assert!(result.f_optimal().unwrap() < 1e-2);
}

#[test]
fn never_worse_than_start() {
    let f = Expr::parse("x^3 - 6*x^2 + 4*x + 12").unwrap();
    let start = f.value(1.0).unwrap();

    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        let result = minimize_unobserved(&f, 1.0, &Config::default(), &mut rng).unwrap();
        assert!(result.f_optimal().unwrap() <= start);
    }
}

#[test]
fn flat_objective_stops_after_one_trial() {
    let flat = |_: f64| 5.0;
    let result = minimize_unobserved(&flat, 0.0, &Config::default(), &mut seeded()).unwrap();

    assert_eq!(result.status(), Status::Success);
    assert_eq!(result.iterations(), 1);
    // Equal objectives are not improvements, so the start point is kept.
    assert_relative_eq!(result.x_optimal().unwrap(), 0.0);
}

#[test]
fn exhaustion_keeps_best_estimate() {
    let config = Config::new(1e-12, 0.1, 200, false).unwrap();
    let result = minimize_unobserved(&|x: f64| x, 0.0, &config, &mut seeded()).unwrap();

    assert_eq!(result.reason(), Some(FailureReason::ExhaustedIterations));
    assert_eq!(result.iterations(), 200);
    assert!(result.x_optimal().unwrap() < 0.0);
}

#[test]
fn search_moves_from_best_point() {
    let f = Expr::parse("(x - 3)^2").unwrap();
    let mut best = 2.0;
    let mut step_size = 0.1;
    let observer = |event: &Event| {
        assert!((event.x - best).abs() < step_size);
        assert_eq!(event.accepted, event.best.x == event.x);
        best = event.best.x;
        step_size = event.step_size;
        None
    };

    minimize(&f, 2.0, &Config::default(), &mut seeded(), observer).unwrap();
}

#[test]
fn shrinking_reduces_step_size() {
    let config = Config::new(1e-12, 0.1, 50, true).unwrap();
    let mut sizes = Vec::new();
    let observer = |event: &Event| {
        sizes.push(event.step_size);
        None
    };

    minimize(&|x: f64| x * x, 1.0, &config, &mut seeded(), observer).unwrap();

    assert_relative_eq!(sizes[0], 0.1);
    for pair in sizes.windows(2) {
        assert_relative_eq!(pair[1], pair[0] * Config::SHRINK_FACTOR);
    }
}

#[test]
fn same_seed_gives_same_result() {
    let f = Expr::parse("x^4 - 3*x^3 + 2").unwrap();
    let first = minimize_unobserved(&f, 1.0, &Config::default(), &mut seeded()).unwrap();
    let second = minimize_unobserved(&f, 1.0, &Config::default(), &mut seeded()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn undefined_candidates_are_rejected() {
    let f = Expr::parse("sqrt(x)").unwrap();
    let observer = |event: &Event| {
        if event.x < 0.0 {
            assert_eq!(event.objective, None);
            assert!(!event.accepted);
        }
        None
    };

    let result = minimize(&f, 0.05, &Config::default(), &mut seeded(), observer).unwrap();

    assert!(result.x_optimal().unwrap() >= 0.0);
}

#[test]
fn observer_can_stop_early() {
    let observer = |event: &Event| (event.iter == 3).then_some(Action::StopEarly);

    let result =
        minimize(&|x: f64| x * x, 1.0, &Config::default(), &mut seeded(), observer).unwrap();

    assert_eq!(result.reason(), Some(FailureReason::StoppedByObserver));
    assert_eq!(result.iterations(), 3);
    assert!(result.f_optimal().unwrap() <= 1.0);
}

#[test]
fn failed_start_has_no_estimate() {
    let f = Expr::parse("ln(x)").unwrap();
    let result = minimize_unobserved(&f, 0.0, &Config::default(), &mut seeded()).unwrap();

    assert_eq!(
        result.reason(),
        Some(FailureReason::EvaluationFailed { x: 0.0 })
    );
    assert_eq!(result.iterations(), 0);
    assert_eq!(result.x_optimal(), None);
}

#[test]
fn invalid_inputs_are_errors() {
    assert!(matches!(
        minimize_unobserved(&|x: f64| x, f64::INFINITY, &Config::default(), &mut seeded()),
        Err(Error::NonFiniteStart(_))
    ));
    assert_eq!(
        Config::new(0.0, 0.1, 10, false),
        Err(ConfigError::Tolerance)
    );
    assert_eq!(
        Config::new(1e-6, -0.1, 10, false),
        Err(ConfigError::StepSize)
    );
}
