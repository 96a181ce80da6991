//! Root-finding error types.  
//! 
//! ┌ [`RootFindingError`] : common runtime errors  
//! │   ├ non-finite function evaluation  
//! │   └ invalid global parameters (e.g. max_iter) 
//! │
//! └ [`ToleranceError`]   : configuration errors  
//!     ├ invalid step tolerance  
//!     └ invalid denominator guard  
//!
//! Running out of iterations is *not* an error; see 
//! [`TerminationReason::IterationLimit`](super::report::TerminationReason).


use thiserror::Error; 


/// Root-finding runtime errors.  
/// 
/// ┌ Non-finite function evaluation  
/// └ Invalid global configuration (e.g. max_iter < 1)
#[derive(Debug, Error)]
pub enum RootFindingError {
    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter   { got: usize },
}


/// Tolerance and guard configuration errors.  
/// 
/// ┌ Invalid step tolerance (`step_tol`)  
/// └ Invalid additive denominator guard (`guard`)
#[derive(Debug, Error)]
pub enum ToleranceError { 
    #[error("invalid `step_tol` tolerance: must be finite and > 0. got {got}")]
    InvalidStepTol { got: f64 },

    #[error("invalid `guard`: must be finite and >= 0. got {got}")]
    InvalidGuard { got: f64 },
}
