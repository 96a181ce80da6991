use super::algorithms::Algorithm; 
use super::config::{CommonCfg, impl_common_cfg}; 
use super::derivative::eval_checked; 
use super::errors::{RootFindingError, ToleranceError}; 
use super::history::IterateHistory; 
use super::report::{RootFindingReport, TerminationReason}; 
use thiserror::Error; 


/// Offset of the second seed point from `w_init` unless overridden. 
pub const DEFAULT_PROBE: f64 = 0.5; 


#[derive(Debug, Error)] 
pub enum SecantError{ 
    #[error(transparent)] 
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("invalid initial guess: w_init={w_init} must be finite")]
    InvalidGuess { w_init: f64 }, 

    #[error("invalid probe offset: must be finite and > 0. got {got}")]
    InvalidProbe { got: f64 }, 

    #[error("degenerate secant at w1={w1}, w2={w2}: g1 - g2 + guard = {denom}")]
    DegenerateSecantStep { w1: f64, w2: f64, denom: f64 }, 

    #[error("secant step non-finite from w1={w1}, w2={w2}")]
    StepNotFinite { w1: f64, w2: f64 }, 
}


/// Secant configuration 
///
/// # Fields 
/// - `common` : [`CommonCfg`] with step tolerance, guard and optional `max_iter`.
/// - `probe`  : distance of the second seed point from `w_init`.
///
/// # Construction 
/// - Use [`SecantCfg::new`] then optional setters. 
///
/// # Defaults 
/// - `step_tol = 1e-5` on the *absolute* step `|w1 - w2|` 
/// - `guard    = 1e-4` added to `g1 - g2` 
/// - `max_iter = 20` 
/// - `probe    = 0.5` 
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SecantCfg { 
    common: CommonCfg, 
    probe: f64, 
}
impl SecantCfg { 
    pub(crate) const ALGORITHM: Algorithm = Algorithm::Secant; 

    #[must_use]
    pub fn new() -> Self { 
        Self { 
            common: CommonCfg::new(), 
            probe: DEFAULT_PROBE, 
        }
    }
    pub fn set_probe(mut self, v: f64) -> Result<Self, SecantError> { 
        if !v.is_finite() || v <= 0.0 { 
            return Err(SecantError::InvalidProbe { got: v }); 
        }
        self.probe = v; 
        Ok(self)
    }
    pub fn probe(&self) -> f64 { 
        self.probe
    }
}
impl Default for SecantCfg { 
    fn default() -> Self { 
        Self::new()
    }
}
impl_common_cfg!(SecantCfg);


/// Picks the second seed point: `w_init - probe`, unless `g` is higher there 
/// than at `w_init`, in which case `w_init + probe`. 
///
/// # Returns 
/// `((w1, g1), g2)` with `g2 = g(w_init)`. 
///
/// # Notes 
/// - One-sided heuristic with no correctness argument: it leans toward lower 
///   `g`, not toward a sign change. Kept as the default seed rule, not as a 
///   robust one. 
#[inline]
pub(crate) fn second_seed<F>(
    g: &mut F, 
    w_init: f64, 
    probe: f64, 
    evals: &mut usize, 
) -> Result<((f64, f64), f64), SecantError> 
where F: FnMut(f64) -> f64 { 
    let g2 = eval_checked(g, w_init, evals)?; 

    let below   = w_init - probe; 
    let g_below = eval_checked(g, below, evals)?; 
    if g_below > g2 { 
        let above   = w_init + probe; 
        let g_above = eval_checked(g, above, evals)?; 
        return Ok(((above, g_above), g2)); 
    }

    Ok(((below, g_below), g2))
}


/// Guarded secant x-intercept of the line through `(w1, g1)` and `(w2, g2)`: 
/// `w1 - g1 * (w1 - w2) / (g1 - g2 + guard)`. 
#[inline]
pub(crate) fn secant_step(
    (w1, g1): (f64, f64), 
    (w2, g2): (f64, f64), 
    guard: f64, 
) -> Result<f64, SecantError> { 
    let denom = g1 - g2 + guard; 
    if denom == 0.0 { 
        return Err(SecantError::DegenerateSecantStep { w1, w2, denom }); 
    }

    let w = w1 - g1 * (w1 - w2) / denom; 
    if !w.is_finite() { 
        return Err(SecantError::StepNotFinite { w1, w2 }); 
    }

    Ok(w)
}


/// Runs the [secant method](https://en.wikipedia.org/wiki/Secant_method) 
/// for a zero of `g` from a single initial point and reports the whole 
/// iterate path.
///
/// # Arguments
/// - `g`      : function whose zero is sought
/// - `w_init` : finite initial point
/// - `cfg`    : [`SecantCfg`] (step tolerance, guard, `max_iter`, probe)
///
/// # Returns
/// [`RootFindingReport`] with 
/// - `history`            : `[w_init, w1_seed, w_1, ..., w_n]`, length `iterations + 2`
/// - `iterations`         : number of updates performed
/// - `evaluations`        : total function evaluations 
/// - `termination_reason` : why it stopped
/// - `algorithm`          : [`Algorithm::Secant`]
///
/// # Errors
/// - [`SecantError::InvalidGuess`]             : `w_init` is NaN/inf
/// - [`SecantError::DegenerateSecantStep`]     : `g1 - g2 + guard == 0`
/// - [`SecantError::StepNotFinite`]            : the update overflowed
/// 
/// * Propagated via [`SecantError::RootFinding`]
/// - [`RootFindingError::NonFiniteEvaluation`] : `g(w)` produced NaN/inf
///
/// # Behavior
/// - Seeds: `w2 = w_init`, `w1 = w_init - probe`, flipped to `w_init + probe` 
///   when `g(w_init - probe) > g(w_init)`. 
/// - Update:
///   `w = w1 - g1 * (w1 - w2) / (g1 - g2 + guard)`, then `w2 <- w1`, `w1 <- w` 
/// - Loop runs while `|w1 - w2| > step_tol` and fewer than `max_iter` 
///   updates have been made. Running out of updates is reported as 
///   [`TerminationReason::IterationLimit`], not as an error. 
/// - `g` is evaluated once per iterate that feeds an update; the previous 
///   value is carried rather than recomputed. 
///
/// # Warning 
/// - Poor initial points may lead to divergence or extremely slow convergence.
pub fn secant<F> ( 
    mut g: F, 
    w_init: f64, 
    cfg: SecantCfg
) -> Result<RootFindingReport, SecantError> 
where F: FnMut(f64) -> f64 { 
    
    if !w_init.is_finite() { 
        return Err(SecantError::InvalidGuess { w_init });
    }

    let algorithm = SecantCfg::ALGORITHM;
    let step_tol  = cfg.step_tol(); 
    let guard     = cfg.guard(); 
    let max_iter  = cfg.max_iter(); 

    log::debug!(
        "{algorithm}: w_init={w_init}, step_tol={step_tol:e}, guard={guard:e}, \
         max_iter={max_iter}, probe={}", 
        cfg.probe
    ); 

    // track function evaluations 
    let mut evals = 0; 

    let ((seed, g_seed), g_init) = second_seed(&mut g, w_init, cfg.probe, &mut evals)?; 

    let mut history = IterateHistory::with_capacity(max_iter + algorithm.seed_len()); 
    history.record(w_init); 
    history.record(seed); 

    // main loop; g(w1) is evaluated lazily so the final iterate is never probed 
    let mut w1   = seed; 
    let mut g1   = Some(g_seed); 
    let mut w2   = w_init; 
    let mut g2   = g_init; 
    let mut iter = 0; 
    while algorithm.step_exceeds(w1, w2, step_tol) && iter < max_iter { 
        let g1_eval = match g1 { 
            Some(v) => v, 
            None    => eval_checked(&mut g, w1, &mut evals)?, 
        };
        let w = secant_step((w1, g1_eval), (w2, g2), guard)?; 
        history.record(w); 

        iter += 1; 
        w2 = w1; 
        g2 = g1_eval; 
        w1 = w; 
        g1 = None; 
    }

    let termination_reason = if algorithm.step_exceeds(w1, w2, step_tol) { 
        log::debug!("{algorithm}: iteration cap {max_iter} reached before step tolerance"); 
        TerminationReason::IterationLimit
    } else { 
        TerminationReason::ToleranceReached
    };
    log::debug!("{algorithm}: stopped at w={w1} after {iter} iterations, {evals} evaluations"); 

    Ok(RootFindingReport { 
        history, 
        iterations  : iter, 
        evaluations : evals, 
        termination_reason, 
        algorithm, 
    })
}


/// [`secant`] with default configuration, returning only the iterate history.
pub fn solve_secant<F>(g: F, w_init: f64) -> Result<IterateHistory, SecantError> 
where F: FnMut(f64) -> f64 { 
    secant(g, w_init, SecantCfg::new()).map(RootFindingReport::into_history)
}
