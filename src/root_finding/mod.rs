// common helpers 
pub mod algorithms; 
pub mod report; 
pub mod errors; 
pub mod history; 
pub mod playback; 
pub(crate) mod config;
pub(crate) mod derivative; 
pub(crate) mod tolerances; 

// algorithms 
pub mod newton;
pub mod secant;

pub use history::IterateHistory; 
pub use newton::{newton, solve_newton, NewtonCfg, NewtonError}; 
pub use report::{RootFindingReport, TerminationReason}; 
pub use secant::{secant, solve_secant, SecantCfg, SecantError}; 
