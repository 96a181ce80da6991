//! Newton-Raphson method

use super::algorithms::Algorithm; 
use super::config::{CommonCfg, impl_common_cfg}; 
use super::derivative::{eval_checked, Derivative}; 
use super::errors::{RootFindingError, ToleranceError}; 
use super::history::IterateHistory; 
use super::report::{RootFindingReport, TerminationReason}; 
use thiserror::Error;


#[derive(Debug, Error)] 
pub enum NewtonError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError), 

    #[error("invalid initial guess: w_init={w_init} must be finite")]
    InvalidGuess { w_init: f64 }, 

    #[error("derivative non-finite at x={x}, g'(x)={dgx}")]
    DerivativeNotFinite { x: f64, dgx: f64 },

    #[error("guarded denominator vanished at x={x}: g'(x) + guard = {denom}")]
    DegenerateStep { x: f64, denom: f64 },

    #[error("step non-finite at x={x}, step={step}; x - step undefined")] 
    StepNotFinite { x: f64, step: f64 }, 

    #[error("finite-difference step not representable at x={x}, h={h};\
             try smaller |x| scaling or analytic derivative"
    )]
    FiniteDifferenceStepUnrepresentable { x: f64, h: f64 }
}


/// Newton configuration.
/// 
/// # Fields
/// - `common` : [`CommonCfg`] with step tolerance, guard and optional `max_iter`.
///
/// # Construction
/// - Use [`NewtonCfg::new`] then optional setters.
///
/// # Defaults
/// - `step_tol = 1e-4` on the *squared* step `(w_old - w)^2` 
/// - `guard    = 1e-4` added to `g'(w)` 
/// - `max_iter = 20` 
#[derive(Debug, Copy, Clone, PartialEq)] 
pub struct NewtonCfg {
    common: CommonCfg,
}
impl NewtonCfg {
    pub(crate) const ALGORITHM: Algorithm = Algorithm::Newton; 

    #[must_use]
    pub fn new() -> Self { 
        Self { 
            common: CommonCfg::new(),
        }
    }
}
impl Default for NewtonCfg { 
    fn default() -> Self { 
        Self::new()
    }
}
impl_common_cfg!(NewtonCfg);


fn newton_loop<F, G>(
    mut g: F, 
    mut dg: Derivative<G>, 
    w_init: f64, 
    cfg: NewtonCfg, 
) -> Result<RootFindingReport, NewtonError> 
where 
    F: FnMut(f64) -> f64, 
    G: FnMut(f64) -> f64 
{   
    let algorithm = NewtonCfg::ALGORITHM;
    let step_tol  = cfg.step_tol(); 
    let guard     = cfg.guard(); 
    let max_iter  = cfg.max_iter(); 

    log::debug!(
        "{algorithm}: w_init={w_init}, step_tol={step_tol:e}, guard={guard:e}, \
         max_iter={max_iter}, analytic derivative={}", 
        dg.is_analytic()
    ); 

    let mut evals: usize = 0; 
    let mut history = IterateHistory::with_capacity(max_iter + algorithm.seed_len()); 
    history.record(w_init); 

    let mut w     = w_init; 
    let mut w_old = f64::INFINITY; 
    let mut iter  = 0; 
    while algorithm.step_exceeds(w_old, w, step_tol) && iter < max_iter { 
        w_old = w; 
        iter += 1; 

        let g_eval    = eval_checked(&mut g, w, &mut evals)?; 
        let grad_eval = dg.eval(&mut g, w, &mut evals)?; 

        // guarded tangent zero-crossing 
        let denom = grad_eval + guard; 
        if denom == 0.0 { 
            return Err(NewtonError::DegenerateStep { x: w, denom }); 
        }
        let step = g_eval / denom; 
        if !step.is_finite() { 
            return Err(NewtonError::StepNotFinite { x: w, step }); 
        }

        w -= step; 
        if !w.is_finite() { 
            return Err(NewtonError::StepNotFinite { x: w_old, step }); 
        }
        history.record(w); 
    }

    let termination_reason = if algorithm.step_exceeds(w_old, w, step_tol) { 
        log::debug!("{algorithm}: iteration cap {max_iter} reached before step tolerance"); 
        TerminationReason::IterationLimit
    } else { 
        TerminationReason::ToleranceReached
    };
    log::debug!("{algorithm}: stopped at w={w} after {iter} iterations, {evals} evaluations"); 

    Ok(RootFindingReport { 
        history, 
        iterations  : iter, 
        evaluations : evals, 
        termination_reason, 
        algorithm, 
    })
}


/// Runs [Newton's method](https://en.wikipedia.org/wiki/Newton_method) 
/// for a zero of `g` and reports the whole iterate path.
///
/// # Arguments
/// - `g`      : function whose zero is sought
/// - `dg`     : optional analytic derivative; if `None`, use central finite-difference
/// - `w_init` : finite initial point
/// - `cfg`    : [`NewtonCfg`] (step tolerance, guard, `max_iter`)
///
/// # Returns
/// [`RootFindingReport`] with:
/// - `history`            : `[w_init, w_1, ..., w_n]`, length `iterations + 1`
/// - `iterations`         : number of updates performed
/// - `evaluations`        : total evaluations (g and g')
/// - `termination_reason` : why it stopped
/// - `algorithm`          : [`Algorithm::Newton`]
///
/// # Errors
/// - [`NewtonError::InvalidGuess`]                        : `w_init` non-finite
/// - [`NewtonError::DerivativeNotFinite`]                 : derivative non-finite
/// - [`NewtonError::DegenerateStep`]                      : `g'(w) + guard == 0`
/// - [`NewtonError::StepNotFinite`]                       : step or next iterate overflowed
/// - [`NewtonError::FiniteDifferenceStepUnrepresentable`] : FD step unrepresentable near `w`
///  
/// * Propagated via [`NewtonError::RootFinding`]:
/// - [`RootFindingError::NonFiniteEvaluation`]            : `g(w)` produced NaN/inf
///
/// # Behavior
/// - Update: `w <- w - g(w) / (g'(w) + guard)`. The additive guard keeps a 
///   flat region from dividing by zero; it biases the step when `g'` is small.
/// - Loop runs while `(w_old - w)^2 > step_tol` and fewer than `max_iter` 
///   updates have been made. `w_old` starts at `+inf`, so at least one 
///   update always happens, even when `w_init` is already a zero.
/// - Hitting `max_iter` first is not an error: the report carries 
///   [`TerminationReason::IterationLimit`] and the history may not have converged.
///
/// # Notes
/// - Convergence is *local only*. There is no damping or line search; poor 
///   initial points can diverge or cycle until the cap is reached.
pub fn newton<F, G>( 
    g: F, 
    dg: Option<G>, 
    w_init: f64, 
    cfg: NewtonCfg, 
) -> Result<RootFindingReport, NewtonError> 
where 
    F: FnMut(f64) -> f64, 
    G: FnMut(f64) -> f64 { 
    
    if !w_init.is_finite() { 
        return Err(NewtonError::InvalidGuess { w_init }); 
    }

    newton_loop(g, Derivative::from_option(dg), w_init, cfg) 
}


/// [`newton`] with default configuration, returning only the iterate history.
pub fn solve_newton<F, G>(g: F, dg: Option<G>, w_init: f64) -> Result<IterateHistory, NewtonError> 
where 
    F: FnMut(f64) -> f64, 
    G: FnMut(f64) -> f64 { 
    newton(g, dg, w_init, NewtonCfg::new()).map(RootFindingReport::into_history)
}
