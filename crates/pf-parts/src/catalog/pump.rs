//! Pump: passes liquid left-right and injects pressure when running.

use indexmap::IndexMap;
use pf_core::LiquidId;

use crate::catalog::settings_mismatch;
use crate::edge::{LEFT, RIGHT};
use crate::error::PartResult;
use crate::part::StatePart;
use crate::route::{FlowRoute, Transitions};
use crate::settings::{PartSettings, PumpSettings};
use crate::spec::PartSpec;

/// Left-right pump.
///
/// The right-to-left route carries the pump's pressure and the
/// acceleration pseudo-liquid: its contribution is superposed like any
/// other source and reconciled onto whatever real liquid occupies the
/// route. A stopped pump still passes liquid, at zero added pressure.
pub struct Pump;

impl PartSpec for Pump {
    fn transitions(&self, part: &StatePart) -> PartResult<Transitions> {
        let settings = match &part.part.settings {
            PartSettings::Pump(s) => s.clone(),
            PartSettings::None => PumpSettings::default(),
            _ => return Err(settings_mismatch(part)),
        };
        let running = part.state.powered.unwrap_or(settings.enabled);
        let pressure = if running { settings.pressure } else { 0.0 };
        Ok(IndexMap::from([
            (LEFT, vec![FlowRoute::to(RIGHT)]),
            (
                RIGHT,
                vec![
                    FlowRoute::to(LEFT)
                        .with_pressure(pressure)
                        .with_liquids(vec![LiquidId::accelerate()]),
                ],
            ),
        ]))
    }
}
