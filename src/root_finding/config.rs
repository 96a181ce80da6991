//! Shared configuration for root-finding algorithms.  
//! 
//! Provides [`CommonCfg`], embedded by every solver config.
//!
//! [`CommonCfg`] : universal fields  
//! ├ `step_tol` : successive-iterate tolerance (optional, per-algorithm default)  
//! ├ `guard`    : additive denominator guard  
//! └ `max_iter` : iteration cap (optional, per-algorithm default) 
//!
//! Unset optionals are resolved against [`Algorithm`] at solve time. 
//! Solver-specific knobs (e.g. the secant probe offset) live on the 
//! solver's own config.

use super::algorithms::{Algorithm, DEFAULT_GUARD}; 


#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CommonCfg {
    step_tol: Option<f64>,
    guard:    f64,
    max_iter: Option<usize>,
}

impl CommonCfg {
    pub fn new() -> Self {
        Self { 
            step_tol : None, 
            guard    : DEFAULT_GUARD, 
            max_iter : None 
        }
    }

    pub fn guard(&self) -> f64 { self.guard }

    // resolved against algorithm defaults 
    pub(crate) fn resolved_step_tol(&self, algorithm: Algorithm) -> f64 { 
        self.step_tol.unwrap_or(algorithm.default_step_tol())
    }
    pub(crate) fn resolved_max_iter(&self, algorithm: Algorithm) -> usize { 
        self.max_iter.unwrap_or(algorithm.default_max_iter())
    }

    // setters (internal) 
    pub(crate) fn with_step_tol (&mut self, v: f64)   { self.step_tol = Some(v); }
    pub(crate) fn with_guard    (&mut self, v: f64)   { self.guard    = v; }
    pub(crate) fn with_max_iter (&mut self, v: usize) { self.max_iter = Some(v); }
}

impl Default for CommonCfg { 
    fn default() -> Self { 
        Self::new()
    }
}

macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl $cfg {
            /// Threshold on successive iterates below which iteration stops. 
            pub fn set_step_tol(
                mut self, v: f64
            ) -> Result<Self, $crate::root_finding::errors::ToleranceError> {
                if !v.is_finite() || v <= 0.0 {
                    return Err(
                        $crate::root_finding::errors::ToleranceError::InvalidStepTol { got: v }
                    );
                }
                self.common.with_step_tol(v);
                Ok(self)
            }
            /// Additive guard on the update denominator; `0.0` disables it. 
            pub fn set_guard(
                mut self, v: f64
            ) -> Result<Self, $crate::root_finding::errors::ToleranceError> {
                if !v.is_finite() || v < 0.0 {
                    return Err(
                        $crate::root_finding::errors::ToleranceError::InvalidGuard { got: v }
                    );
                }
                self.common.with_guard(v);
                Ok(self)
            }
            pub fn set_max_iter(
                mut self, v: usize
            ) -> Result<Self, $crate::root_finding::errors::RootFindingError> {
                if v == 0 {
                    return Err(
                        $crate::root_finding::errors::RootFindingError::InvalidMaxIter { got: v }
                    );
                }
                self.common.with_max_iter(v);
                Ok(self)
            }

            pub fn step_tol(&self) -> f64 { 
                self.common.resolved_step_tol(Self::ALGORITHM)
            }
            pub fn guard(&self) -> f64 { 
                self.common.guard()
            }
            pub fn max_iter(&self) -> usize { 
                self.common.resolved_max_iter(Self::ALGORITHM)
            }
        }
    };
}
pub(crate) use impl_common_cfg; 
