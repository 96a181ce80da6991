//! Newton and secant zero-finders for scalar functions.
//!
//! Both solvers return the full ordered history of iterates, not only the
//! final estimate, so callers can inspect or replay the path taken.
//! See [`root_finding`] for the solvers and [`root_finding::playback`] for
//! the render-agnostic helpers built on top of a history.

pub mod root_finding;
