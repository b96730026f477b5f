//! Boundary inlet/outlet: where liquid enters or leaves the system.

use indexmap::IndexMap;

use crate::catalog::settings_mismatch;
use crate::edge::{IO_ANCHOR, RIGHT};
use crate::error::PartResult;
use crate::part::StatePart;
use crate::route::{FlowRoute, Transitions};
use crate::settings::{InletSettings, PartSettings};
use crate::spec::PartSpec;

/// Global inlet.
///
/// The source route starts at the shared boundary anchor and feeds the
/// configured liquids rightward at the configured pressure; the reverse
/// route drains back to the anchor, which is also what lets any traced
/// path terminate here. With no configured liquids the part is a pure
/// outlet.
pub struct Inlet;

impl PartSpec for Inlet {
    fn transitions(&self, part: &StatePart) -> PartResult<Transitions> {
        let settings = match &part.part.settings {
            PartSettings::Inlet(s) => s.clone(),
            PartSettings::None => InletSettings::default(),
            _ => return Err(settings_mismatch(part)),
        };
        let pressure = if settings.enabled { settings.pressure } else { 0.0 };
        Ok(IndexMap::from([
            (
                IO_ANCHOR,
                vec![
                    FlowRoute::to(RIGHT)
                        .with_pressure(pressure)
                        .with_liquids(settings.liquids),
                ],
            ),
            (RIGHT, vec![FlowRoute::to(IO_ANCHOR)]),
        ]))
    }
}
