//! Step-size stopping rules for root-finding algorithms.
//!
//! Each [`Algorithm`] measures the distance between successive iterates 
//! its own way:
//! - Newton : squared difference, `(w_old - w)^2`  
//! - Secant : absolute difference, `|w1 - w2|`  
//!
//! Iteration continues while the measure is strictly greater than the 
//! configured tolerance.


use crate::root_finding::algorithms::Algorithm;


impl Algorithm {
    /// Distance between two successive iterates as used by the stopping rule.
    ///
    /// # Notes 
    /// - An infinite previous iterate (Newton's `w_old` before the first 
    ///   step) yields `+inf`, so the loop is always entered at least once. 
    #[inline]
    pub(crate) fn step_measure(self, prev: f64, next: f64) -> f64 {
        match self { 
            Algorithm::Newton => (prev - next).powi(2), 
            Algorithm::Secant => (prev - next).abs(), 
        }
    }

    /// `true` while the step between `prev` and `next` still exceeds `tol`.
    #[inline]
    pub(crate) fn step_exceeds(self, prev: f64, next: f64, tol: f64) -> bool { 
        self.step_measure(prev, next) > tol
    }
}
