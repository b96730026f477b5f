//! pf-core: stable foundation for pipeflow.
//!
//! Contains:
//! - error (shared error types)
//! - numeric (tolerances + float helpers)
//! - liquid (liquid identifiers + reserved sentinels)
//! - rotation (quarter-turn grid rotations)

pub mod error;
pub mod liquid;
pub mod numeric;
pub mod rotation;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use liquid::{LiquidId, combine_liquids};
pub use numeric::*;
pub use rotation::Rotation;
