use approx::assert_relative_eq;

use scalaropt_core::Expr;

use crate::{Action, Bound, Error, FailureReason, Status, interval::BracketError};

use super::{Config, ConfigError, Event, minimize, minimize_unobserved};

fn shifted_square(x: f64) -> f64 {
    (x - 3.0).powi(2)
}

#[test]
fn converges_on_shifted_square() {
    let result = minimize_unobserved(&shifted_square, [0.0, 10.0], &Config::default())
        .expect("valid bracket");

    assert_eq!(result.status(), Status::Success);
    assert_relative_eq!(result.x_optimal().unwrap(), 3.0, epsilon = 1e-5);
    assert!(result.f_optimal().unwrap() < 1e-10);
}

#[test]
fn minimizes_parsed_expression() {
    // Local minimum of x³ - 4x at x = 2/√3 ≈ 1.1547.
    let f = Expr::parse("x^3 - 4*x").unwrap();
    let config = Config::new(1e-7, 100).unwrap();

    let result = minimize_unobserved(&f, [-2.0, 2.0], &config).unwrap();

    assert!(result.is_success());
    assert_relative_eq!(
        result.x_optimal().unwrap(),
        2.0 / 3.0_f64.sqrt(),
        epsilon = 1e-6
    );
}

#[test]
fn final_bracket_is_within_tolerance() {
    let tolerance = 1e-4;
    let config = Config::new(tolerance, 100).unwrap();

    let mut last_width = f64::INFINITY;
    let mut steps = 0;
    let observer = |event: &Event| {
        assert!(event.width() < last_width, "bracket must shrink every step");
        last_width = event.width();
        steps = event.iter;
        None
    };

    let result = minimize(&shifted_square, [0.0, 10.0], &config, observer).unwrap();

    assert!(last_width <= tolerance);
    assert_eq!(result.iterations(), steps);
}

#[test]
fn one_fresh_evaluation_per_step() {
    use std::cell::Cell;

    let calls = Cell::new(0_usize);
    let counted = |x: f64| {
        calls.set(calls.get() + 1);
        shifted_square(x)
    };

    let result = minimize_unobserved(&counted, [0.0, 10.0], &Config::default()).unwrap();

    // Two initial probes, one per step, one for the final estimate.
    assert_eq!(calls.get(), result.iterations() + 3);
}

#[test]
fn monotone_objective_fails_at_boundary() {
    let increasing = |x: f64| x;
    let result = minimize_unobserved(&increasing, [0.0, 10.0], &Config::default()).unwrap();

    assert_eq!(result.status(), Status::Failure);
    assert_eq!(result.reason(), Some(FailureReason::Boundary(Bound::Lower)));
    assert_relative_eq!(result.x_optimal().unwrap(), 0.0, epsilon = 1e-6);

    let decreasing = |x: f64| -x;
    let result = minimize_unobserved(&decreasing, [0.0, 10.0], &Config::default()).unwrap();
    assert_eq!(result.reason(), Some(FailureReason::Boundary(Bound::Upper)));
}

#[test]
fn reversed_bracket_is_accepted() {
    let forward = minimize_unobserved(&shifted_square, [0.0, 10.0], &Config::default()).unwrap();
    let reversed = minimize_unobserved(&shifted_square, [10.0, 0.0], &Config::default()).unwrap();
    assert_eq!(forward, reversed);
}

#[test]
fn repeated_calls_are_identical() {
    let f = Expr::parse("x^4 - 3*x^3 + 2").unwrap();
    let first = minimize_unobserved(&f, [-4.0, 4.0], &Config::default()).unwrap();
    let second = minimize_unobserved(&f, [-4.0, 4.0], &Config::default()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn iteration_cap_reports_exhaustion() {
    let config = Config::new(1e-6, 5).unwrap();
    let result = minimize_unobserved(&shifted_square, [0.0, 10.0], &config).unwrap();

    assert_eq!(result.reason(), Some(FailureReason::ExhaustedIterations));
    assert_eq!(result.iterations(), 5);
    assert!(result.x_optimal().is_some());
}

#[test]
fn observer_can_stop_early() {
    let observer = |event: &Event| (event.iter == 3).then_some(Action::StopEarly);

    let result = minimize(&shifted_square, [0.0, 10.0], &Config::default(), observer).unwrap();

    assert_eq!(result.reason(), Some(FailureReason::StoppedByObserver));
    assert_eq!(result.iterations(), 3);
    assert!(result.f_optimal().unwrap() < shifted_square(0.0));
}

#[test]
fn evaluation_failure_is_classified() {
    // ln(x) is undefined on the left part of the bracket.
    let f = Expr::parse("ln(x)").unwrap();
    let result = minimize_unobserved(&f, [-1.0, 1.0], &Config::default()).unwrap();

    assert!(matches!(
        result.reason(),
        Some(FailureReason::EvaluationFailed { .. })
    ));
    assert_eq!(result.x_optimal(), None);
}

#[test]
fn invalid_inputs_are_errors() {
    assert_eq!(
        minimize_unobserved(&shifted_square, [1.0, 1.0], &Config::default()),
        Err(Error::InvalidBracket(BracketError::ZeroWidth(1.0)))
    );
    assert_eq!(Config::new(0.0, 10), Err(ConfigError::Tolerance));
    assert_eq!(Config::new(f64::NAN, 10), Err(ConfigError::Tolerance));
}
