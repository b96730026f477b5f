//! Valves: an on/off valve and a one-way check valve.

use indexmap::IndexMap;

use crate::catalog::settings_mismatch;
use crate::edge::{LEFT, RIGHT};
use crate::error::PartResult;
use crate::part::StatePart;
use crate::route::{FlowRoute, Transitions};
use crate::settings::{PartSettings, ValveSettings};
use crate::spec::PartSpec;

/// Left-right valve. Shut valves expose no transitions at all, so traces
/// treat them as dead ends. A runtime actuator override wins over the
/// stored setting.
pub struct Valve;

impl PartSpec for Valve {
    fn transitions(&self, part: &StatePart) -> PartResult<Transitions> {
        let settings = match &part.part.settings {
            PartSettings::Valve(s) => s.clone(),
            PartSettings::None => ValveSettings::default(),
            _ => return Err(settings_mismatch(part)),
        };
        let open = part.state.powered.unwrap_or(settings.open);
        if !open {
            return Ok(Transitions::new());
        }
        Ok(IndexMap::from([
            (LEFT, vec![FlowRoute::to(RIGHT)]),
            (RIGHT, vec![FlowRoute::to(LEFT)]),
        ]))
    }
}

/// One-way valve: liquid passes left to right only.
pub struct CheckValve;

impl PartSpec for CheckValve {
    fn transitions(&self, _part: &StatePart) -> PartResult<Transitions> {
        Ok(IndexMap::from([(LEFT, vec![FlowRoute::to(RIGHT)])]))
    }
}
