use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use zerotrace::root_finding::newton::{newton, solve_newton, NewtonCfg, NewtonError};
use zerotrace::root_finding::errors::{RootFindingError, ToleranceError};
use zerotrace::root_finding::report::TerminationReason;

type TestResult = Result<(), NewtonError>;

fn no_derivative() -> Option<fn(f64) -> f64> { 
    None 
}

#[test]
fn finds_2_with_analytic_derivative() -> TestResult {
    let g  = |w: f64| w * w - 4.0;
    let dg = |w: f64| 2.0 * w;

    let res = newton(g, Some(dg), 3.0, NewtonCfg::new())?;

    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert!(res.converged());
    assert!(res.iterations <= 20);
    assert_abs_diff_eq!(res.root(), 2.0, epsilon = 1e-2);
    assert_eq!(res.history.len(), res.iterations + 1);
    assert_eq!(res.history[0], 3.0);
    assert_eq!(res.algorithm_name(), "newton");
    Ok(())
}

#[test]
fn finds_2_with_fd_derivative() -> TestResult {
    let g = |w: f64| w * w - 4.0;

    let history = solve_newton(g, no_derivative(), 3.0)?;

    assert!(history.len() <= 21);
    assert_abs_diff_eq!(history.last().unwrap_or(f64::NAN), 2.0, epsilon = 1e-2);
    Ok(())
}

#[test]
fn negative_start_finds_negative_root() -> TestResult {
    let history = solve_newton(|w: f64| w * w - 4.0, Some(|w: f64| 2.0 * w), -3.0)?;
    assert_abs_diff_eq!(history.last().unwrap_or(f64::NAN), -2.0, epsilon = 1e-2);
    Ok(())
}

#[test]
fn finds_half_pi_for_cosine() -> TestResult {
    let res = newton(f64::cos, Some(|w: f64| -w.sin()), 1.0, NewtonCfg::new())?;
    assert_abs_diff_eq!(res.root(), std::f64::consts::FRAC_PI_2, epsilon = 1e-6);
    assert_eq!(res.iterations, 3);
    Ok(())
}

#[test]
fn history_length_is_iterations_plus_one() -> TestResult {
    for w_init in [-3.0, -0.7, 0.3, 1.0, 2.5, 10.0] {
        let res = newton(|w: f64| w.powi(3) - w - 1.0, Some(|w: f64| 3.0 * w * w - 1.0), w_init, NewtonCfg::new())?;
        assert_eq!(res.history.len(), res.iterations + 1);
    }
    Ok(())
}

#[test]
fn flat_function_hits_cap_without_division_error() -> TestResult {
    let res = newton(|_w: f64| 5.0, Some(|_w: f64| 0.0), -3.0, NewtonCfg::new())?;

    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    assert!(!res.converged());
    assert_eq!(res.iterations, 20);
    assert_eq!(res.history.len(), 21);
    assert!(res.history.iter().all(f64::is_finite));
    // each guarded step moves by 5 / 1e-4 
    assert_abs_diff_eq!(res.history[1], -3.0 - 5e4, epsilon = 1e-6);
    assert_eq!(res.evaluations, 40);
    Ok(())
}

#[test]
fn flat_function_with_fd_derivative_counts_fd_evaluations() -> TestResult {
    let res = newton(|_w: f64| 5.0, no_derivative(), -3.0, NewtonCfg::new())?;

    assert_eq!(res.history.len(), 21);
    assert_eq!(res.evaluations, 60);
    Ok(())
}

#[test]
fn start_at_root_stops_after_first_iteration() -> TestResult {
    let res = newton(|w: f64| w * w - 4.0, Some(|w: f64| 2.0 * w), 2.0, NewtonCfg::new())?;

    assert_eq!(res.iterations, 1);
    assert_eq!(res.history.as_slice(), &[2.0, 2.0]);
    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert_eq!(res.last_step(), Some(0.0));
    Ok(())
}

#[test]
fn converged_last_step_is_within_tolerance() -> TestResult {
    let cfg = NewtonCfg::new();
    let res = newton(|w: f64| w * w - 4.0, Some(|w: f64| 2.0 * w), 3.0, cfg)?;

    let last = res.last_step().unwrap_or(f64::INFINITY);
    assert!(last <= cfg.step_tol());
    Ok(())
}

#[test]
fn max_iter_caps_history() -> TestResult {
    let cfg = NewtonCfg::new().set_max_iter(3)?;
    let res = newton(|_w: f64| 5.0, Some(|_w: f64| 0.0), 0.0, cfg)?;

    assert_eq!(res.iterations, 3);
    assert_eq!(res.history.len(), 4);
    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    Ok(())
}

#[test]
fn tighter_tolerance_runs_longer() -> TestResult {
    let g  = |w: f64| w * w - 4.0;
    let dg = |w: f64| 2.0 * w;

    let loose = newton(g, Some(dg), 3.0, NewtonCfg::new())?;
    let tight = newton(g, Some(dg), 3.0, NewtonCfg::new().set_step_tol(1e-20)?.set_guard(0.0)?)?;

    assert!(tight.iterations > loose.iterations);
    assert_abs_diff_eq!(tight.root(), 2.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn defaults_are_exposed() {
    let cfg = NewtonCfg::default();
    assert_eq!(cfg.step_tol(), 1e-4);
    assert_eq!(cfg.guard(), 1e-4);
    assert_eq!(cfg.max_iter(), 20);
}

#[test]
fn invalid_initial_guess() {
    let err = solve_newton(|w: f64| w, no_derivative(), f64::NAN).unwrap_err();
    assert!(matches!(err, NewtonError::InvalidGuess { w_init } if w_init.is_nan()));

    let err = solve_newton(|w: f64| w, no_derivative(), f64::INFINITY).unwrap_err();
    assert!(matches!(err, NewtonError::InvalidGuess { .. }));
}

#[test]
fn undefined_function_value_surfaces() {
    let err = solve_newton(f64::ln, Some(|w: f64| 1.0 / w), -1.0).unwrap_err();

    assert!(matches!(
        err,
        NewtonError::RootFinding(RootFindingError::NonFiniteEvaluation { x, fx })
        if x == -1.0 && fx.is_nan()
    ));
}

#[test]
fn non_finite_derivative_errors() {
    let err = solve_newton(|w: f64| w, Some(|_w: f64| f64::NAN), 1.0).unwrap_err();
    assert!(matches!(err, NewtonError::DerivativeNotFinite { x, .. } if x == 1.0));
}

#[test]
fn invalid_config_values() {
    assert!(matches!(
        NewtonCfg::new().set_step_tol(0.0),
        Err(ToleranceError::InvalidStepTol { got }) if got == 0.0
    ));
    assert!(matches!(
        NewtonCfg::new().set_step_tol(f64::NAN),
        Err(ToleranceError::InvalidStepTol { .. })
    ));
    assert!(matches!(
        NewtonCfg::new().set_guard(-1e-4),
        Err(ToleranceError::InvalidGuard { .. })
    ));
    assert!(matches!(
        NewtonCfg::new().set_max_iter(0),
        Err(RootFindingError::InvalidMaxIter { got: 0 })
    ));
}

#[test]
fn error_messages_name_the_failure() {
    let err = solve_newton(|w: f64| w, no_derivative(), f64::NAN).unwrap_err();
    assert!(err.to_string().contains("initial guess"));
}

fn bits(res: Result<zerotrace::root_finding::IterateHistory, NewtonError>) -> Option<Vec<u64>> {
    res.ok().map(|h| h.iter().map(f64::to_bits).collect())
}

proptest! {
    #[test]
    fn repeated_solves_are_bit_identical(w_init in -10.0f64..10.0) {
        let g  = |w: f64| w.powi(3) - 2.0 * w + 2.0;
        let dg = |w: f64| 3.0 * w * w - 2.0;

        let a = bits(solve_newton(g, Some(dg), w_init));
        let b = bits(solve_newton(g, Some(dg), w_init));
        prop_assert_eq!(a, b);
    }

    #[test]
    fn history_never_exceeds_cap(w_init in -10.0f64..10.0) {
        if let Ok(res) = newton(|w: f64| w.sin() + 0.5, no_derivative(), w_init, NewtonCfg::new()) {
            prop_assert!(res.history.len() <= 21);
            prop_assert_eq!(res.history.len(), res.iterations + 1);
            prop_assert_eq!(res.history[0], w_init);
        }
    }
}
