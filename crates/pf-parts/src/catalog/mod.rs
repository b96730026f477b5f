//! Builtin part specifications.
//!
//! One module per part family, mirroring the standard parts of the
//! surrounding application. All coordinates are local (anchor-relative);
//! placement into grid space happens in the solver's graph builder.

mod bridge;
mod inlet;
mod pump;
mod tube;
mod valve;
mod vessel;

pub use bridge::BridgeTube;
pub use inlet::Inlet;
pub use pump::Pump;
pub use tube::{CrossTube, ElbowTube, StraightTube, TeeTube};
pub use valve::{CheckValve, Valve};
pub use vessel::{DipTube, Kettle};

use crate::error::PartError;
use crate::part::{PartKind, StatePart};
use crate::spec::PartCatalog;

pub(crate) fn register_builtin(registry: &mut PartCatalog) {
    registry.register(PartKind::StraightTube, Box::new(StraightTube));
    registry.register(PartKind::ElbowTube, Box::new(ElbowTube));
    registry.register(PartKind::TeeTube, Box::new(TeeTube));
    registry.register(PartKind::CrossTube, Box::new(CrossTube));
    registry.register(PartKind::BridgeTube, Box::new(BridgeTube));
    registry.register(PartKind::Valve, Box::new(Valve));
    registry.register(PartKind::CheckValve, Box::new(CheckValve));
    registry.register(PartKind::Pump, Box::new(Pump));
    registry.register(PartKind::Inlet, Box::new(Inlet));
    registry.register(PartKind::Kettle, Box::new(Kettle));
    registry.register(PartKind::DipTube, Box::new(DipTube));
}

pub(crate) fn settings_mismatch(part: &StatePart) -> PartError {
    PartError::SettingsMismatch {
        id: part.id().clone(),
        kind: part.kind(),
        found: part.part.settings.kind_name(),
    }
}
