//! Defines the [`RootFindingReport`] struct returned by all 
//! root-finding algorithms. 

use super::algorithms::Algorithm; 
use super::history::IterateHistory; 


/// Reasons a root-finding algorithm may terminate.
///
/// Neither variant is an error: hitting the cap is the documented, silent 
/// way for a solve to end without meeting its tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)] 
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerminationReason { 
    ToleranceReached, 
    IterationLimit,
}


/// Final report returned by all root-finding algorithms.  
/// 
/// [`RootFindingReport`]
/// - `history`            : every iterate, seeds included  
/// - `iterations`         : number of updates performed  
/// - `evaluations`        : total evaluations of `g` and its derivative  
/// - `termination_reason` : why the solver stopped ([`TerminationReason`])  
/// - `algorithm`          : which method produced the history  
///
/// `history.len() == iterations + algorithm.seed_len()` always holds.
#[derive(Debug, Clone, PartialEq)] 
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RootFindingReport {
    pub history            : IterateHistory, 
    pub iterations         : usize, 
    pub evaluations        : usize, 
    pub termination_reason : TerminationReason, 
    pub algorithm          : Algorithm, 
}

impl RootFindingReport { 
    /// Final iterate. 
    pub fn root(&self) -> f64 { 
        // every solver seeds the history before returning 
        self.history.last().unwrap_or(f64::NAN)
    }

    /// Stopping-rule measure between the last two iterates 
    /// (squared for Newton, absolute for secant). 
    pub fn last_step(&self) -> Option<f64> { 
        let n = self.history.len(); 
        if n < 2 { 
            return None; 
        }
        Some(self.algorithm.step_measure(self.history[n - 2], self.history[n - 1]))
    }

    pub fn converged(&self) -> bool { 
        self.termination_reason == TerminationReason::ToleranceReached
    }

    pub fn algorithm_name(&self) -> &'static str { 
        self.algorithm.algorithm_name()
    }

    pub fn into_history(self) -> IterateHistory { 
        self.history
    }
}
