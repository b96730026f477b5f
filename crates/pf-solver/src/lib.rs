//! pf-solver: the pipe-network flow engine.
//!
//! Given positioned parts and a specification registry, compute the signed
//! per-edge, per-liquid flow through every part. The computation is a pure
//! function of its input, recomputed from scratch on every call:
//!
//! 1. **Graph building**: local part connectivity is placed into grid
//!    space (flip, then translate, then rotate).
//! 2. **Tracing**: from each pressure-emitting edge, a recursive walk
//!    builds a segment tree of sequential chains and branch points,
//!    collapsing branches that later reconverge.
//! 3. **Friction**: total resistance of a tree via series/parallel
//!    composition, as in a resistor network.
//! 4. **Distribution**: the source's flow (pressure over total friction)
//!    is written through the tree, splitting at forks in inverse
//!    proportion to branch resistance.
//! 5. **Superposition**: independent sources simply add.
//! 6. **Reconciliation**: opposing contributions net out per edge, and
//!    pump-injected pressure is folded into the real liquids.

pub mod distribute;
pub mod error;
pub mod flow_part;
pub mod merge;
pub mod segment;
pub mod solve;
pub mod trace;

pub use distribute::distribute;
pub use error::{SolveError, SolveResult};
pub use flow_part::{FlowPart, build_flow_parts, normalize_flows};
pub use merge::reconcile;
pub use segment::{Continuation, Segment};
pub use solve::{calculate_flows, solve, solve_normalized, superpose};
pub use trace::trace;
