//! Error types for solver operations.

use pf_parts::PartError;
use thiserror::Error;

/// Errors surfaced by the flow pipeline.
///
/// All of these are deterministic functions of the input layout; there is
/// no transient failure mode and nothing to retry. Unresolvable routes and
/// sources with no path are not errors; they simply contribute no flow.
#[derive(Error, Debug)]
pub enum SolveError {
    #[error("part configuration error: {0}")]
    Part(#[from] PartError),
}

pub type SolveResult<T> = Result<T, SolveError>;
