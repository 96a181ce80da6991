//! Function and derivative evaluation shared by the solvers.
//!
//! - [`eval_checked`] : evaluates `g(x)`, counts it, rejects NaN/inf  
//! - [`Derivative`]   : analytic closure or central finite difference  
//!
//! The finite-difference path uses `h = eps^{1/3} * max(|x|, 1)` and falls 
//! back to ULP neighbours when `x ± h` is not representable.

use super::errors::RootFindingError; 
use super::newton::NewtonError; 


/// ULP helpers for finite-difference fallback near representability edges 
#[inline] 
fn next_up(x: f64) -> f64 { 
    if x.is_nan() || x == f64::INFINITY { return x; }
    // smallest positive subnormal 
    if x == 0.0 { return f64::from_bits(1); } 
    
    let bits   = x.to_bits(); 
    let bumped = if x > 0.0 { bits + 1 } else { bits - 1 }; 
    f64::from_bits(bumped)
}
#[inline] 
fn next_down(x: f64) -> f64 { 
    if x.is_nan() || x == f64::NEG_INFINITY { return x; } 
    // largest negative subnormal 
    if x == 0.0 { return -f64::from_bits(1); } 

    let bits   = x.to_bits(); 
    let bumped = if x > 0.0 { bits - 1 } else { bits + 1 };
    f64::from_bits(bumped)
}


/// Evaluates `g(x)`, bumping `evals`. A non-finite value means `g` is not 
/// defined at `x` and is surfaced to the caller unchanged. 
#[inline] 
pub(crate) fn eval_checked<F>(
    g: &mut F, 
    x: f64,
    evals: &mut usize
) -> Result<f64, RootFindingError> where F: FnMut(f64) -> f64 { 
    let gx = { *evals += 1; g(x) }; 
    if !gx.is_finite() { 
        return Err(RootFindingError::NonFiniteEvaluation { x, fx: gx }); 
    }

    Ok(gx)
}


/// Source of `g'(x)` for Newton's method. 
pub(crate) enum Derivative<G> { 
    Analytic(G), 
    CentralDifference, 
}

impl<G> Derivative<G> where G: FnMut(f64) -> f64 { 
    pub(crate) fn from_option(dg: Option<G>) -> Self { 
        match dg { 
            Some(dg) => Derivative::Analytic(dg), 
            None     => Derivative::CentralDifference, 
        }
    }

    pub(crate) fn is_analytic(&self) -> bool { 
        matches!(self, Derivative::Analytic(_))
    }

    /// Evaluates the derivative at `x`; `g` is only called on the 
    /// finite-difference path. 
    pub(crate) fn eval<F>(
        &mut self, 
        g: &mut F, 
        x: f64, 
        evals: &mut usize
    ) -> Result<f64, NewtonError> where F: FnMut(f64) -> f64 { 
        let dgx = match self { 
            Derivative::Analytic(dg)       => { *evals += 1; dg(x) }, 
            Derivative::CentralDifference  => central_difference(g, x, evals)?, 
        };
        if !dgx.is_finite() { 
            return Err(NewtonError::DerivativeNotFinite { x, dgx }); 
        }

        Ok(dgx)
    }
}


#[inline] 
fn central_difference<F>(
    g: &mut F, 
    x: f64, 
    evals: &mut usize
) -> Result<f64, NewtonError> where F: FnMut(f64) -> f64 { 
    let mut h  = f64::EPSILON.cbrt() * x.abs().max(1.0); 
    let mut xp = x + h; 
    let mut xm = x - h; 

    // try rescue if representability collapses 
    if !xp.is_finite() || !xm.is_finite() || xp == x || xm == x { 
        xp = next_up(x); 
        xm = next_down(x); 
        h  = 0.5 * (xp - xm); 

        if !xp.is_finite() || !xm.is_finite() || xp == x || xm == x { 
            return Err(NewtonError::FiniteDifferenceStepUnrepresentable { x, h });
        }
    }

    let gxp = eval_checked(g, xp, evals)?; 
    let gxm = eval_checked(g, xm, evals)?; 

    Ok((gxp - gxm) / (2.0 * h))
}
